//! Domain ports defining the edges of the hexagon.

mod students_query;

pub use students_query::StudentsQuery;
#[cfg(test)]
pub use students_query::MockStudentsQuery;
