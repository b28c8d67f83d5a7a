//! Text rendering of deal render instructions for one-shot output.

use adgram_proto::{ActionKind, BadgeStyle, DealCard, DealsView, StageMark};
use colored::{ColoredString, Colorize};

pub fn print_view(view: &DealsView) {
    match view {
        DealsView::Empty => println!("{}", "No deals to show".dimmed()),
        DealsView::List(cards) => {
            for card in cards {
                print_card(card);
            }
        }
    }
}

fn print_card(card: &DealCard) {
    let mut head = format!("#{} {} {}", card.id, card.title.bold(), badge(card));
    if let Some(channel) = &card.channel {
        head.push_str(&format!("  {}", channel.dimmed()));
    }
    if card.amount > 0.0 {
        head.push_str(&format!("  {} TON", card.amount));
    }
    println!("{head}");

    let timeline: String = card
        .timeline
        .iter()
        .map(|mark| match mark {
            StageMark::Done => "●─",
            StageMark::Current => "◉─",
            StageMark::Neutral => "○─",
            StageMark::Terminal => "✕─",
        })
        .collect();
    println!("   {timeline}");

    if !card.actions.is_empty() {
        let actions: Vec<String> = card
            .actions
            .iter()
            .map(|action| match action.kind {
                ActionKind::Primary => action.label.cyan().to_string(),
                ActionKind::Danger => action.label.red().to_string(),
            })
            .collect();
        println!("   → {}", actions.join(" | "));
    }
    println!();
}

fn badge(card: &DealCard) -> ColoredString {
    let text = format!("[{}]", card.badge.text);
    match card.badge.style {
        BadgeStyle::Pending => text.yellow(),
        BadgeStyle::Active => text.cyan(),
        BadgeStyle::Success => text.green(),
        BadgeStyle::Danger => text.red(),
        BadgeStyle::Neutral => text.dimmed(),
    }
}
