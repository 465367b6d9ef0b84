use serde::Serialize;
use std::fmt;

/// Defines the closed set of node type tags together with their tag strings.
macro_rules! define_task_node_types {
    ( $( ($variant:ident, $tag:literal) ),* $(,)? ) => {
        /// The node type encoded in the first component of a node name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum TaskNodeType {
            $( $variant, )*
        }

        impl TaskNodeType {
            pub const ALL: &'static [TaskNodeType] = &[ $( TaskNodeType::$variant, )* ];

            /// Maps a tag string to its type. Tags are case-sensitive.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $( $tag => Some(TaskNodeType::$variant), )*
                    _ => None,
                }
            }

            pub fn tag(&self) -> &'static str {
                match self {
                    $( TaskNodeType::$variant => $tag, )*
                }
            }
        }
    };
}

define_task_node_types! {
    (TextDisplay, "textDisplay"),
    (ImageDisplay, "imageDisplay"),
    (TextImageDisplay, "textImageDisplay"),
    (ImageTextDisplay, "imageTextDisplay"),
    (Link, "link"),
    (RadioButtons, "radioButtons"),
    (RadioButtonsWithAnswer, "radioButtonsWithAnswer"),
    (Checklist, "checkList"),
    (Classification, "classification"),
    (TextField, "textField"),
    (TextFieldNumerical, "textFieldNumerical"),
    (TextFieldWithUnit, "textFieldWithUnit"),
    (TextFieldWithAnswer, "textFieldWithAnswer"),
    (TextArea, "textArea"),
    (TextAreaWithAnswer, "textAreaWithAnswer"),
    (Timestamp, "timestampDisplay"),
    (Date, "date"),
}

impl TaskNodeType {
    /// Types whose second name component names an image under `res/`.
    pub fn is_image_bearing(&self) -> bool {
        matches!(
            self,
            TaskNodeType::ImageDisplay
                | TaskNodeType::TextImageDisplay
                | TaskNodeType::ImageTextDisplay
        )
    }

    /// Types whose display text may carry an `Answer=` marker.
    pub fn carries_answer(&self) -> bool {
        matches!(
            self,
            TaskNodeType::RadioButtonsWithAnswer
                | TaskNodeType::TextFieldWithAnswer
                | TaskNodeType::TextAreaWithAnswer
        )
    }
}

impl fmt::Display for TaskNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
