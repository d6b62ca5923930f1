//! Card Surface
//!
//! Host for one [`CardShell`]. The shell is rebuilt on every render from the
//! current props (resolution is pure and cheap); only pointer and focus state
//! lives in a signal. The webview animates hover through the CSS transition
//! in the painted style, so the shell is settled before painting.

use dioxus::dioxus_core::DynamicNode;
use dioxus::prelude::*;
use glasscard_core::{
    AriaAttributes, CardIdentity, CardRenderer, CardShell, InputEvent, Interaction, ShellOptions,
    SlotContent,
};

use super::renderer::DioxusRenderer;

/// Children passed to a card, checked for anything to show.
///
/// A component given no children receives an `Ok` placeholder node, so a
/// successful render alone does not count as content.
#[derive(Clone, Copy)]
pub struct ChildSlot<'a>(pub &'a Element);

fn vnode_has_content(node: &VNode) -> bool {
    node.template.roots.iter().any(|root| match root {
        TemplateNode::Element { .. } => true,
        TemplateNode::Text { text } => !text.trim().is_empty(),
        TemplateNode::Dynamic { id } => node
            .dynamic_nodes
            .get(*id)
            .is_some_and(dynamic_has_content),
    })
}

fn dynamic_has_content(node: &DynamicNode) -> bool {
    match node {
        DynamicNode::Component(_) => true,
        DynamicNode::Text(text) => !text.value.trim().is_empty(),
        DynamicNode::Placeholder(_) => false,
        DynamicNode::Fragment(nodes) => nodes.iter().any(vnode_has_content),
    }
}

impl SlotContent for ChildSlot<'_> {
    fn is_present(&self) -> bool {
        self.0.as_ref().is_ok_and(vnode_has_content)
    }
}

#[component]
pub fn CardSurface(
    /// Tier, variant, size, interactivity and theme
    options: ShellOptions,
    /// Validated accessible name and description
    identity: CardIdentity,
    /// Attributes to render instead of the shell's own (stateful cards)
    #[props(default)]
    aria: Option<AriaAttributes>,
    /// Activation sink for clicks and confirm keys; ignored by static shells
    #[props(default)]
    on_input: Option<EventHandler<InputEvent>>,
    /// Card is in its "on" state
    #[props(default = false)]
    active: bool,
    /// Card-kind class
    #[props(default)]
    kind: Option<&'static str>,
    children: Element,
) -> Element {
    let interaction = use_signal(Interaction::default);

    let mut shell = match CardShell::new(options, identity, &ChildSlot(&children)) {
        Ok(shell) => shell,
        Err(err) => {
            tracing::error!(error = %err, "card not rendered");
            return VNode::empty();
        }
    };
    shell.restore(interaction());
    shell.settle();

    let aria = aria.unwrap_or_else(|| shell.aria());
    let renderer = DioxusRenderer {
        on_input,
        interaction: Some(interaction),
        active,
        kind,
    };
    renderer.render(&shell.frame(aria), children)
}
