mod answer_query;
mod resolve_query;

pub use answer_query::AnswerQueryUseCase;
pub use resolve_query::{Resolution, ResolveQueryUseCase};
