//! Flat CSV export of the result matrix.

use std::io::Write;

use crate::matrix::ResultMatrix;

/// Write the matrix as CSV: header `test,<b1>,<b2>,...`, one row per test,
/// both axes sorted lexicographically. Cells use the shared status symbols;
/// a never-observed pair renders the skip symbol.
pub fn write_csv(writer: &mut dyn Write, matrix: &ResultMatrix) -> std::io::Result<()> {
    write!(writer, "test")?;
    for backend in matrix.backends() {
        write!(writer, ",{backend}")?;
    }
    writeln!(writer)?;

    for test in matrix.tests() {
        write!(writer, "{test}")?;
        for backend in matrix.backends() {
            write!(writer, ",{}", matrix.status(test, backend).symbol())?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
