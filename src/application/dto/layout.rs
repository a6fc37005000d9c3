//! Fixed three-section skill layout consumed by the template renderer

use serde::Serialize;

/// One row of a layout section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LayoutRow {
    /// Category header row; `index` is the 1-based running row number
    /// within the category section
    Header { skill: String, index: usize },
    /// A skill with its resolved value
    Entry { skill: String, value: i64 },
}

/// The three display sections: two columns of base skills followed by the
/// category section. Consumed verbatim by the renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct LayoutModel {
    pub sections: [Vec<LayoutRow>; 3],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_layout_serializes_as_three_lists() {
        let layout = LayoutModel {
            sections: [
                vec![LayoutRow::Entry {
                    skill: "Climb".to_string(),
                    value: 20,
                }],
                vec![],
                vec![
                    LayoutRow::Header {
                        skill: "Firearms".to_string(),
                        index: 1,
                    },
                    LayoutRow::Entry {
                        skill: "Handgun".to_string(),
                        value: 20,
                    },
                ],
            ],
        };

        assert_eq!(
            serde_json::to_value(&layout).unwrap(),
            json!([
                [{ "skill": "Climb", "value": 20 }],
                [],
                [
                    { "skill": "Firearms", "index": 1 },
                    { "skill": "Handgun", "value": 20 }
                ]
            ])
        );
    }
}
