mod quiz;

pub use quiz::QuizView;

#[cfg(test)]
mod smoke;
