use crate::core::NodeId;

/// Why a popup went away. Every cause ends the edit session the same way;
/// the reason is only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Confirmed,
    /// Tap landed outside the popup box.
    Outside,
    /// Esc pressed while the popup had the keyboard.
    Cancelled,
    /// Host code dropped focus while the popup was open.
    Programmatic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange {
    pub target: NodeId,
    pub value: String,
}

impl ValueChange {
    pub fn new(target: impl Into<NodeId>, value: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            value: value.into(),
        }
    }
}

/// Actions emitted by widgets in `InteractionResult`.
/// These flow upward from widgets to whoever owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    ValueChanged { change: ValueChange },
    /// Ask the enclosing popup to close, handing over the value to commit.
    RequestClose { reason: DismissReason, value: String },
    /// The popup closed; `value` is what its owner should take over.
    PopupDismissed { reason: DismissReason, value: String },
    /// Direct text entry is suspended; hide the caret.
    ReleaseKeyboard,
    /// The widget dropped its own focus and must not be refocused implicitly.
    ReleaseFocus { target: NodeId },
}
