use crate::application::Threshold;
use crate::monitor::MonitorAnnotations;

/// Converts Monitor Y-axis annotations into application thresholds.
///
/// Returns `None` when there is nothing to convert, so that the `thresholds`
/// key is left out of the output rather than written as an empty list.
pub fn translate_annotations(annotations: Option<&MonitorAnnotations>) -> Option<Vec<Threshold>> {
    let y = &annotations?.y;
    if y.is_empty() {
        return None;
    }

    Some(
        y.iter()
            .map(|annotation| Threshold {
                color: annotation.color.clone(),
                comparison_operator: annotation.comparison_operator,
                value: annotation.value.clone(),
                visible: annotation.show_value,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{ComparisonOperator, YAnnotation};

    fn annotation(color: &str, operator: ComparisonOperator, value: i64) -> YAnnotation {
        YAnnotation {
            color: color.to_string(),
            comparison_operator: operator,
            show_value: false,
            value: value.into(),
        }
    }

    #[test]
    fn absent_or_empty_annotations_produce_nothing() {
        assert_eq!(translate_annotations(None), None);
        assert_eq!(
            translate_annotations(Some(&MonitorAnnotations { y: vec![] })),
            None
        );
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        let annotations = MonitorAnnotations {
            y: vec![
                annotation("#ff0000", ComparisonOperator::GreaterThan, 90),
                annotation("#00ff00", ComparisonOperator::LessThan, 10),
                annotation("#ff0000", ComparisonOperator::GreaterThan, 90),
            ],
        };
        let thresholds = translate_annotations(Some(&annotations)).unwrap();

        assert_eq!(thresholds.len(), 3);
        assert_eq!(thresholds[0], thresholds[2]);
        assert_eq!(thresholds[1].color, "#00ff00");
        assert_eq!(
            thresholds[1].comparison_operator,
            ComparisonOperator::LessThan
        );
        assert!(!thresholds[1].visible);
    }
}
