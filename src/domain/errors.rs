use quick_error::quick_error;

quick_error! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum GridError {
        OutOfBounds(row: usize, col: usize, rows: usize, columns: usize) {
            display("cell ({row}, {col}) is outside the {rows}x{columns} grid")
        }
    }
}
