//! Severity grade encoding for the downstream target

use crate::io::configuration::{MAX_GRADE, ORDINAL_LABEL_LEN};
use crate::io::error::{Result, invalid_parameter};

/// Numeric encoding scheme for the severity grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Thermometer vector: first `grade` entries set to 1.0
    #[default]
    Ordinal,
    /// Single float equal to the grade
    Regression,
    /// Single integer class index equal to the grade
    Classification,
}

/// Encoded training target for one slide
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    /// Ordinal thermometer encoding
    Ordinal([f32; ORDINAL_LABEL_LEN]),
    /// Regression target
    Regression(f32),
    /// Classification class index
    Classification(i64),
}

/// Encode a severity grade under the configured scheme
///
/// # Errors
///
/// Returns `InvalidParameter` when the grade exceeds the valid range; the
/// thermometer code has no representation for it
pub fn encode_label(grade: u8, mode: LabelMode) -> Result<Label> {
    if grade > MAX_GRADE {
        return Err(invalid_parameter(
            "grade",
            &grade,
            &format!("must be at most {MAX_GRADE}"),
        ));
    }
    Ok(match mode {
        LabelMode::Ordinal => {
            let mut thermometer = [0.0_f32; ORDINAL_LABEL_LEN];
            thermometer
                .iter_mut()
                .take(grade as usize)
                .for_each(|slot| *slot = 1.0);
            Label::Ordinal(thermometer)
        }
        LabelMode::Regression => Label::Regression(f32::from(grade)),
        LabelMode::Classification => Label::Classification(i64::from(grade)),
    })
}
