pub mod passage_report;
pub mod verify_passage_use_case;
