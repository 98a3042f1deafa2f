use catalog_model::Delimiter;
use catalog_output::CsvOptions;

/// Default number of rows returned by a preview.
pub const DEFAULT_PREVIEW_LIMIT: usize = 100;

/// Settings a session is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Overrides the vendor's default delimiter.
    pub delimiter: Option<Delimiter>,
    pub csv: CsvOptions,
    pub preview_limit: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            csv: CsvOptions::default(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: Option<Delimiter>) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_csv(mut self, csv: CsvOptions) -> Self {
        self.csv = csv;
        self
    }

    pub fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }
}
