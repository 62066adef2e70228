mod line;
mod line_format;

pub use line::{Line, LineIntersection};

#[cfg(test)]
mod tests_properties;
