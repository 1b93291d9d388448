use crate::telemetry::{log_event, LogLevel};
use serde_json::json;

pub const ALL_CATEGORIES: &str = "all";
pub const EXPAND_LABEL: &str = "See All Projects";
pub const COLLAPSE_LABEL: &str = "Show Less";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioCard {
    pub category: String,
    pub overflow: bool,
}

impl PortfolioCard {
    pub fn new(category: &str, overflow: bool) -> Self {
        Self {
            category: category.to_string(),
            overflow,
        }
    }

    fn matches(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category == category
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub active_category: String,
    pub expanded: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            expanded: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Card(usize),
    SectionStart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggeredReveal {
    pub card: usize,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionPlan {
    pub generation: u64,
    pub reveals: Vec<StaggeredReveal>,
    pub scroll: ScrollTarget,
    pub scroll_delay_ms: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct Timing {
    pub threshold: usize,
    pub stagger_ms: u32,
    pub scroll_delay_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            threshold: 4,
            stagger_ms: 100,
            scroll_delay_ms: 300,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PortfolioFilter {
    cards: Vec<PortfolioCard>,
    revealed: Vec<bool>,
    state: FilterState,
    timing: Timing,
    generation: u64,
}

impl PortfolioFilter {
    pub fn new(cards: Vec<PortfolioCard>, timing: Timing) -> Self {
        let revealed = vec![false; cards.len()];
        Self {
            cards,
            revealed,
            state: FilterState::default(),
            timing,
            generation: 0,
        }
    }

    pub fn select_category(&mut self, category: &str) {
        self.state = FilterState {
            active_category: category.to_string(),
            expanded: false,
        };
        self.revealed.iter_mut().for_each(|flag| *flag = false);
        self.generation += 1;

        log_event(
            LogLevel::Info,
            "portfolio.select",
            json!({
                "category": category,
                "matching": self.matching_count(),
                "seeAll": self.expand_control_visible(),
            }),
        );
    }

    // None when the grid has no overflow cards.
    pub fn toggle_expansion(&mut self) -> Option<ExpansionPlan> {
        let overflow: Vec<usize> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.overflow)
            .map(|(index, _)| index)
            .collect();
        let first = *overflow.first()?;

        self.state.expanded = !self.state.expanded;
        self.generation += 1;
        log_event(
            LogLevel::Info,
            "portfolio.expansion",
            json!({ "expanded": self.state.expanded, "category": self.state.active_category }),
        );

        if self.state.expanded {
            let reveals = overflow
                .iter()
                .enumerate()
                .map(|(position, &card)| StaggeredReveal {
                    card,
                    delay_ms: self.timing.stagger_ms.saturating_mul(position as u32),
                })
                .collect();

            return Some(ExpansionPlan {
                generation: self.generation,
                reveals,
                scroll: ScrollTarget::Card(first),
                scroll_delay_ms: self.timing.scroll_delay_ms,
            });
        }

        self.revealed.iter_mut().for_each(|flag| *flag = false);
        Some(ExpansionPlan {
            generation: self.generation,
            reveals: Vec::new(),
            scroll: ScrollTarget::SectionStart,
            scroll_delay_ms: 0,
        })
    }

    // Reveals from a plan older than the latest toggle or category change are dropped.
    pub fn reveal(&mut self, card: usize, generation: u64) -> bool {
        if !self.is_current(generation) || !self.state.expanded {
            return false;
        }

        match (self.cards.get(card), self.revealed.get_mut(card)) {
            (Some(entry), Some(flag)) if entry.overflow => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn is_visible(&self, card: usize) -> bool {
        let Some(entry) = self.cards.get(card) else {
            return false;
        };

        entry.matches(&self.state.active_category) && (!entry.overflow || self.revealed[card])
    }

    pub fn visible_cards(&self) -> Vec<usize> {
        (0..self.cards.len()).filter(|&index| self.is_visible(index)).collect()
    }

    pub fn matching_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| card.matches(&self.state.active_category))
            .count()
    }

    pub fn expand_control_visible(&self) -> bool {
        self.matching_count() > self.timing.threshold
    }

    pub fn label(&self) -> &'static str {
        if self.state.expanded {
            COLLAPSE_LABEL
        } else {
            EXPAND_LABEL
        }
    }

    pub fn is_active_tab(&self, filter: &str) -> bool {
        self.state.active_category == filter
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(cards: &[(&str, bool)]) -> PortfolioFilter {
        let cards = cards
            .iter()
            .map(|(category, overflow)| PortfolioCard::new(category, *overflow))
            .collect();
        let mut filter = PortfolioFilter::new(cards, Timing::default());
        filter.select_category(ALL_CATEGORIES);
        filter
    }

    fn apply_plan(filter: &mut PortfolioFilter, plan: &ExpansionPlan) {
        for reveal in &plan.reveals {
            filter.reveal(reveal.card, plan.generation);
        }
    }

    #[test]
    fn selecting_a_category_shows_only_its_cards() {
        let mut filter = filter(&[
            ("web", false),
            ("ui", false),
            ("web", false),
            ("print", false),
            ("ui", false),
        ]);

        filter.select_category("web");

        assert_eq!(filter.visible_cards(), vec![0, 2]);
        assert!(!filter.expand_control_visible());
    }

    #[test]
    fn every_visible_card_matches_the_active_category() {
        let mut filter = filter(&[
            ("web", false),
            ("ui", true),
            ("web", true),
            ("print", false),
            ("ui", false),
            ("web", false),
        ]);

        for category in ["web", "ui", "print", "missing", ALL_CATEGORIES] {
            filter.select_category(category);
            if let Some(plan) = filter.toggle_expansion() {
                apply_plan(&mut filter, &plan);
            }

            for index in filter.visible_cards() {
                let card = &filter.cards[index];
                assert!(category == ALL_CATEGORIES || card.category == category);
            }
        }
    }

    #[test]
    fn category_change_collapses_expansion_and_restores_label() {
        let mut filter = filter(&[("web", false), ("web", true)]);
        let plan = filter.toggle_expansion().expect("overflow present");
        apply_plan(&mut filter, &plan);
        assert_eq!(filter.label(), COLLAPSE_LABEL);

        filter.select_category("web");

        assert!(!filter.state().expanded);
        assert_eq!(filter.label(), EXPAND_LABEL);
        assert_eq!(filter.visible_cards(), vec![0]);
    }

    #[test]
    fn expand_control_follows_threshold() {
        let mut filter = filter(&[
            ("web", false),
            ("web", false),
            ("web", false),
            ("web", false),
            ("web", true),
            ("ui", false),
        ]);

        assert!(filter.expand_control_visible());
        filter.select_category("web");
        assert!(filter.expand_control_visible());
        filter.select_category("ui");
        assert!(!filter.expand_control_visible());
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        let mut filter = filter(&[("web", false); 4]);
        filter.select_category("web");
        assert_eq!(filter.matching_count(), 4);
        assert!(!filter.expand_control_visible());
    }

    #[test]
    fn overflow_cards_reveal_with_staggered_delays() {
        let mut filter = filter(&[
            ("all", false),
            ("all", false),
            ("all", false),
            ("all", false),
            ("all", true),
            ("all", true),
        ]);

        assert_eq!(filter.visible_cards(), vec![0, 1, 2, 3]);
        assert!(filter.expand_control_visible());

        let plan = filter.toggle_expansion().expect("overflow present");
        assert_eq!(
            plan.reveals,
            vec![
                StaggeredReveal { card: 4, delay_ms: 0 },
                StaggeredReveal { card: 5, delay_ms: 100 },
            ]
        );
        assert_eq!(plan.scroll, ScrollTarget::Card(4));
        assert_eq!(plan.scroll_delay_ms, 300);

        apply_plan(&mut filter, &plan);
        assert_eq!(filter.visible_cards(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn expand_then_collapse_restores_visible_set() {
        let mut filter = filter(&[("web", false), ("ui", true), ("web", true), ("ui", false)]);
        filter.select_category("web");
        let before = filter.visible_cards();

        let plan = filter.toggle_expansion().expect("overflow present");
        apply_plan(&mut filter, &plan);
        assert_ne!(filter.visible_cards(), before);

        let collapse = filter.toggle_expansion().expect("overflow present");
        assert_eq!(collapse.scroll, ScrollTarget::SectionStart);
        assert!(collapse.reveals.is_empty());
        assert_eq!(filter.visible_cards(), before);
        assert_eq!(filter.label(), EXPAND_LABEL);
    }

    #[test]
    fn pending_reveal_after_collapse_is_dropped() {
        let mut filter = filter(&[("web", false), ("web", true)]);
        let plan = filter.toggle_expansion().expect("overflow present");
        filter.toggle_expansion();

        assert!(!filter.reveal(plan.reveals[0].card, plan.generation));
        assert_eq!(filter.visible_cards(), vec![0]);
    }

    #[test]
    fn reveal_from_an_earlier_expansion_is_dropped() {
        let mut filter = filter(&[("all", false), ("all", true), ("all", true)]);
        let first = filter.toggle_expansion().expect("overflow present");
        filter.toggle_expansion();
        let second = filter.toggle_expansion().expect("overflow present");

        assert!(!filter.is_current(first.generation));
        assert!(!filter.reveal(first.reveals[1].card, first.generation));
        assert_eq!(filter.visible_cards(), vec![0]);

        assert!(filter.reveal(second.reveals[0].card, second.generation));
        assert_eq!(filter.visible_cards(), vec![0, 1]);
    }

    #[test]
    fn category_change_invalidates_pending_plan() {
        let mut filter = filter(&[("web", false), ("web", true)]);
        let plan = filter.toggle_expansion().expect("overflow present");
        filter.select_category("web");

        assert!(!filter.is_current(plan.generation));
        assert!(!filter.reveal(plan.reveals[0].card, plan.generation));
    }

    #[test]
    fn reveal_ignores_regular_and_unknown_cards() {
        let mut filter = filter(&[("web", false), ("web", true)]);
        let plan = filter.toggle_expansion().expect("overflow present");

        assert!(!filter.reveal(0, plan.generation));
        assert!(!filter.reveal(9, plan.generation));
        assert!(filter.reveal(1, plan.generation));
    }

    #[test]
    fn toggle_without_overflow_cards_is_a_no_op() {
        let mut filter = filter(&[("web", false), ("ui", false)]);
        assert!(filter.toggle_expansion().is_none());
        assert!(!filter.state().expanded);
    }

    #[test]
    fn active_tab_tracks_selection() {
        let mut filter = filter(&[("web", false)]);
        assert!(filter.is_active_tab(ALL_CATEGORIES));

        filter.select_category("web");
        assert!(filter.is_active_tab("web"));
        assert!(!filter.is_active_tab(ALL_CATEGORIES));
    }
}
