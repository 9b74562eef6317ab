/// Appends percent-encoded parameters to a fixed base URL.
///
/// The base may already carry a query (`?A=C`); the first appended parameter
/// then starts with `&`.
#[derive(Debug)]
pub(super) struct QueryUrl(String);

impl QueryUrl {
    pub(super) fn new(base: &str) -> Self {
        Self(base.to_string())
    }

    pub(super) fn param(mut self, key: &str, value: &str) -> Self {
        let separator = if self.0.contains('?') { '&' } else { '?' };
        self.0.push(separator);
        self.0.push_str(key);
        self.0.push('=');
        self.0.push_str(&urlencoding::encode(value));
        self
    }

    pub(super) fn finish(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_param_starts_the_query() {
        let url = QueryUrl::new("http://x.test/a").param("k", "v").param("e", "").finish();
        assert_eq!(url, "http://x.test/a?k=v&e=");
    }

    #[test]
    fn existing_query_is_extended() {
        let url = QueryUrl::new("http://x.test/?A=C").param("fn", "Jane Doe").finish();
        assert_eq!(url, "http://x.test/?A=C&fn=Jane%20Doe");
    }

    #[test]
    fn values_are_encoded() {
        let url = QueryUrl::new("http://x.test/").param("q", "a&b=c/d").finish();
        assert_eq!(url, "http://x.test/?q=a%26b%3Dc%2Fd");
    }
}
