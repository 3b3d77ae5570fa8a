mod repository_sink;

pub use repository_sink::RepositorySubmissionSink;
