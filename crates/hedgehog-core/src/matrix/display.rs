//! `Display` formatting for [`Matrix`].

use core::fmt;

use super::Matrix;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "matrix([], shape=({}, {}))", self.rows, self.cols);
        }

        writeln!(f, "matrix([")?;
        for r in 0..self.rows {
            write!(f, "  [")?;
            for (c, v) in self.row(r).iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{v:.p$}")?,
                    None => write!(f, "{v}")?,
                }
            }
            if r < self.rows - 1 {
                writeln!(f, "],")?;
            } else {
                writeln!(f, "]")?;
            }
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_2x2() {
        let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        assert_eq!(format!("{m}"), "matrix([\n  [1, 2],\n  [3, 4]\n])");
    }

    #[test]
    fn test_display_precision() {
        let m = Matrix::from_rows(&[&[1.0, 2.0 / 3.0]]).unwrap();
        let s = format!("{m:.3}");
        assert!(s.contains("[1.000, 0.667]"));
    }

    #[test]
    fn test_display_empty() {
        let m = Matrix::zeros(0, 3);
        assert_eq!(format!("{m}"), "matrix([], shape=(0, 3))");
    }
}
