mod tables;

pub use self::tables::{
    candidates as print_candidates, extraction as print_extraction_report,
    rankings as print_rankings_report,
};
