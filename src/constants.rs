//! Global constants for the upload form controller.

/// Relative endpoint receiving the multipart upload.
pub const UPLOAD_ENDPOINT: &str = "/upload-multi";

/// Form field carrying each uploaded file part.
pub const FILES_FIELD: &str = "files[]";

/// Form field carrying the percentage as a bare number string.
pub const PERCENT_FIELD: &str = "porcentagem";

/// Form field carrying the production line choice, when the page has one.
pub const LINE_FIELD: &str = "linha";

/// Lower bound of the percentage field.
pub const PERCENT_MIN: f64 = 0.0;

/// Upper bound of the percentage field.
pub const PERCENT_MAX: f64 = 100.0;

/// Increment applied by one stepper click.
pub const PERCENT_STEP: f64 = 5.0;

/// Decimal places for rendered consumption values.
pub const RESULT_DECIMALS: usize = 3;
