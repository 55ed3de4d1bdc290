//! 失敗 -> problem details の変換表とレスポンス構築

pub mod detail;
pub mod envelope;
pub mod responses;
pub mod table;

pub use detail::{ProblemDetail, ProblemSource};
pub use envelope::{build_empty, build_payload, build_response, ResponseEnvelope, ResponseWrapper};
pub use table::{registered_problem_types, Family, ProblemType, TitleRule};

#[cfg(test)]
mod tests;
