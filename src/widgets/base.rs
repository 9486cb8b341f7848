use crate::core::NodeId;
use crate::widgets::traits::RenderContext;

#[derive(Debug, Clone)]
pub struct WidgetBase {
    id: NodeId,
    label: String,
}

impl WidgetBase {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(id),
            label: label.into(),
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn node_id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_focused(&self, ctx: &RenderContext) -> bool {
        ctx.is_focused(self.id())
    }

    pub fn is_selected(&self, ctx: &RenderContext) -> bool {
        ctx.is_selected(self.id())
    }

    pub fn focus_marker(&self, selected: bool) -> &'static str {
        if selected { ">" } else { " " }
    }
}
