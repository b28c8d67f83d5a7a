//! Pure mapping from deal snapshots to render instructions.
//!
//! No presentation concerns live here: the output is consumed by whichever
//! adapter is active (TUI, host web view).

use adgram_proto::{
    ActionButton, ActionKind, BadgeStyle, Deal, DealCard, DealFilter, DealsView, StageMark,
    StatusBadge, TIMELINE_STAGES, capitalize_first,
};

/// Escape special HTML characters in user-supplied text.
///
/// Applied exactly once per render to `title`, `channel`, and `label`;
/// numeric fields need no escaping.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the whole deals view under the active filter.
pub fn render_deals(deals: &[Deal], filter: &DealFilter) -> DealsView {
    let cards: Vec<DealCard> = deals
        .iter()
        .filter(|deal| filter.matches(deal))
        .map(render_card)
        .collect();

    if cards.is_empty() {
        DealsView::Empty
    } else {
        DealsView::List(cards)
    }
}

/// Render instructions for a single deal.
pub fn render_card(deal: &Deal) -> DealCard {
    DealCard {
        id: deal.id,
        title: escape_html(&deal.title),
        channel: deal.channel.as_deref().map(escape_html),
        amount: deal.amount,
        timeline: render_timeline(deal),
        badge: StatusBadge {
            text: escape_html(&deal.label),
            style: BadgeStyle::for_status(&deal.status),
        },
        actions: render_actions(deal),
    }
}

fn render_timeline(deal: &Deal) -> [StageMark; TIMELINE_STAGES] {
    // Terminal deals off the timeline (step sentinel 0) override every stage;
    // a terminal deal that kept its ordinal step falls through to the normal
    // per-stage comparison.
    if deal.is_terminal && deal.step == 0 {
        return [StageMark::Terminal; TIMELINE_STAGES];
    }

    std::array::from_fn(|i| {
        let index = (i + 1) as u8;
        if index < deal.step {
            StageMark::Done
        } else if index == deal.step {
            StageMark::Current
        } else {
            StageMark::Neutral
        }
    })
}

fn render_actions(deal: &Deal) -> Vec<ActionButton> {
    // Terminal deals never expose actions, regardless of what the
    // collaborator sent in allowed_transitions.
    if deal.is_terminal || deal.allowed_transitions.is_empty() {
        return Vec::new();
    }

    deal.allowed_transitions
        .iter()
        .map(|target| ActionButton {
            target_state: target.clone(),
            label: capitalize_first(target),
            kind: if target == "cancelled" || target == "refunded" {
                ActionKind::Danger
            } else {
                ActionKind::Primary
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::deal;

    #[test]
    fn timeline_monotonicity_for_every_step() {
        for step in 1..=6u8 {
            let mut d = deal(1, "pending");
            d.step = step;
            let card = render_card(&d);

            for (i, mark) in card.timeline.iter().enumerate() {
                let index = (i + 1) as u8;
                let expected = if index < step {
                    StageMark::Done
                } else if index == step {
                    StageMark::Current
                } else {
                    StageMark::Neutral
                };
                assert_eq!(*mark, expected, "step {step}, stage {index}");
            }
        }
    }

    #[test]
    fn terminal_sentinel_overrides_every_stage() {
        let mut d = deal(3, "cancelled");
        d.is_terminal = true;
        d.step = 0;

        let card = render_card(&d);
        assert_eq!(card.timeline, [StageMark::Terminal; TIMELINE_STAGES]);
    }

    #[test]
    fn terminal_with_ordinal_step_does_not_panic() {
        // Collaborator sent a contradictory combination; render normally.
        let mut d = deal(4, "completed");
        d.is_terminal = true;
        d.step = 6;

        let card = render_card(&d);
        assert_eq!(card.timeline[5], StageMark::Current);
    }

    #[test]
    fn terminal_suppresses_actions_regardless_of_payload() {
        let mut d = deal(5, "refunded");
        d.is_terminal = true;
        d.step = 0;
        // A buggy collaborator keeps sending transitions for terminal deals
        d.allowed_transitions = vec!["posted".to_string(), "verified".to_string()];

        assert!(render_card(&d).actions.is_empty());
    }

    #[test]
    fn actions_preserve_order_and_flag_destructive_targets() {
        let mut d = deal(6, "funded");
        d.step = 3;
        d.allowed_transitions = vec![
            "scheduled".to_string(),
            "posted".to_string(),
            "refunded".to_string(),
        ];

        let actions = render_card(&d).actions;
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].label, "Scheduled");
        assert_eq!(actions[0].kind, ActionKind::Primary);
        assert_eq!(actions[1].target_state, "posted");
        assert_eq!(actions[2].label, "Refunded");
        assert_eq!(actions[2].kind, ActionKind::Danger);
    }

    #[test]
    fn cancelled_target_is_danger() {
        let mut d = deal(7, "pending");
        d.allowed_transitions = vec!["accepted".to_string(), "cancelled".to_string()];

        let actions = render_card(&d).actions;
        assert_eq!(actions[1].kind, ActionKind::Danger);
    }

    #[test]
    fn user_text_is_escaped_without_double_escaping() {
        let mut d = deal(8, "pending");
        d.title = "<script>alert('x')</script> & co".to_string();

        let first = render_card(&d);
        let second = render_card(&d);

        assert_eq!(first.title, "&lt;script&gt;alert('x')&lt;/script&gt; &amp; co");
        // Rendering twice from the same snapshot is idempotent
        assert_eq!(first.title, second.title);
    }

    #[test]
    fn badge_uses_label_text_with_status_keyed_style() {
        let mut d = deal(9, "funded");
        d.label = "Escrow Funded".to_string();

        let card = render_card(&d);
        assert_eq!(card.badge.text, "Escrow Funded");
        assert_eq!(card.badge.style, BadgeStyle::Active);
    }

    #[test]
    fn filter_round_trip() {
        let mut placement = deal(1, "pending");
        placement.deal_type = "placement".to_string();
        let mut review = deal(2, "pending");
        review.deal_type = "review".to_string();
        let deals = vec![placement, review];

        let view = render_deals(&deals, &DealFilter::Kind("review".to_string()));
        let cards = view.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, 2);
    }

    #[test]
    fn empty_after_filtering_renders_single_placeholder() {
        let mut d = deal(1, "pending");
        d.deal_type = "placement".to_string();

        let view = render_deals(&[d], &DealFilter::Kind("review".to_string()));
        assert_eq!(view, DealsView::Empty);
        assert!(view.cards().is_empty());
    }

    #[test]
    fn no_deals_at_all_renders_placeholder() {
        assert_eq!(render_deals(&[], &DealFilter::All), DealsView::Empty);
    }
}
