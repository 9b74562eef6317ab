//! Export endpoints used by the URL builders.

/// Host of the vCard and iCalendar conversion services.
pub const OOMPH_SERVER_ROOT: &str = "http://visitmix.com/labs/oomph/1.0/Server";

pub const VCARD_SERVICE_URL: &str = const_str::concat!(OOMPH_SERVER_ROOT, "/vcard.ashx");
pub const ICALENDAR_SERVICE_URL: &str = const_str::concat!(OOMPH_SERVER_ROOT, "/icalendar.ashx");

pub const YAHOO_CONTACT_URL: &str = "http://address.yahoo.com/?A=C";
pub const YAHOO_CALENDAR_URL: &str = "http://calendar.yahoo.com/?v=60&type=0";
pub const GOOGLE_CALENDAR_URL: &str = "http://www.google.com/calendar/event?action=TEMPLATE";
pub const WINDOWS_LIVE_CALENDAR_URL: &str = "http://spaces.live.com/api.aspx?wx_action=createEvent";
pub const THIRTY_BOXES_URL: &str = "http://30boxes.com/add.php";

/// Zoom level used when the map centers on a single coordinate.
pub const SINGLE_LOCATION_ZOOM: u8 = 13;

/// Events with longer descriptions are truncated to fit the panel.
pub const DESCRIPTION_MAX_CHARS: usize = 150;
