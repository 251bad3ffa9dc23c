pub mod extract;
pub mod scan;
pub mod window;

pub use self::extract::{extract, extract_with, Candidate, ExtractOptions};
pub use self::scan::{scan, usable_documents, CorpusScanner};
pub use self::window::{scan_window, SkipReason, WindowScan};
