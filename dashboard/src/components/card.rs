//! Client list card and its icon badge.

use leptos::prelude::*;

use super::{Glyph, Icon};
use crate::content::ClientListItem;

/// Round badge holding a 16px icon.
#[component]
pub fn IconBadge(children: Children) -> impl IntoView {
    view! {
        <div class="icon-badge">
            <div class="icon-badge-slot">{children()}</div>
        </div>
    }
}

/// Summary card for one client list: title, description, count and badge.
///
/// Scales up slightly on hover (see `COMPONENT_CSS`).
#[component]
pub fn ClientListCard(
    /// Stable identifier, rendered as `data-list-id`
    #[prop(into)]
    id: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    count: u32,
    icon: Glyph,
) -> impl IntoView {
    view! {
        <button type="button" class="client-card" data-list-id=id>
            <div class="client-card-header">
                <div class="client-card-heading">
                    <h3 class="client-card-title">{title}</h3>
                    <IconBadge>
                        <Icon glyph=icon />
                    </IconBadge>
                </div>
                <p class="client-card-description">{description}</p>
            </div>
            <div class="client-card-footer">
                <div class="client-card-tally">
                    <span class="client-card-count">{count}</span>
                    <span class="client-card-unit">"Clients"</span>
                </div>
                <div class="client-card-meter"></div>
            </div>
        </button>
    }
}

impl ClientListItem {
    /// Renders this item as a [`ClientListCard`].
    pub fn into_card(self) -> impl IntoView {
        view! {
            <ClientListCard
                id=self.id
                title=self.title
                description=self.description
                count=self.count
                icon=self.icon
            />
        }
    }
}
