#[cfg(test)]
pub mod test {
    use std::path::Path;

    use crate::file::ReadFile;

    /// In-memory byte source: parse config content in tests without a file.
    pub struct StubReader(String);

    impl StubReader {
        pub fn new(content: &str) -> Self {
            Self(content.to_string())
        }
    }

    impl ReadFile for StubReader {
        fn read(&self, _path: &Path) -> std::io::Result<Vec<u8>> {
            Ok(self.0.clone().into_bytes())
        }
    }

    /// A current-format document with one host and a root-level setting.
    pub const CURRENT_DOC: &str = "\
hosts:
  github.com:
  - user: monalisa
    oauth_token: OTOKEN
editor: ed
";

    /// A pre-migration document: flat hostname-to-token pairs, no `hosts` key.
    pub const LEGACY_DOC: &str = "\
github.com:
  user: monalisa
  oauth_token: OTOKEN
";
}
