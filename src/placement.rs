//! Card placement for a given active card.
//!
//! Every card is in exactly one of three phases, decided only by its own index
//! and the active index. The rendering layer animates between placements with a
//! CSS transition; nothing here interpolates.

use std::fmt;

const PAST_SCALE: f64 = 0.25;
const PAST_OPACITY: f64 = 0.9;
const PAST_WIDTH_PCT: f64 = 40.0;
const PAST_STACK_ORIGIN_PX: f64 = -20.0;
const PAST_STACK_STEP_PX: f64 = 120.0;

const FUTURE_SCALE: f64 = 0.8;
const FUTURE_SHIFT_PX: f64 = 100.0;

const STAGE_WIDTH_PCT: f64 = 50.0;
const EDGE_INSET_PCT: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardPhase {
    Past,
    Active,
    Future,
}

impl CardPhase {
    pub fn of(index: usize, active: usize) -> Self {
        if index == active {
            CardPhase::Active
        } else if index < active {
            CardPhase::Past
        } else {
            CardPhase::Future
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardPhase::Past => "past",
            CardPhase::Active => "active",
            CardPhase::Future => "future",
        }
    }
}

impl fmt::Display for CardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which edge of the stage the card is pinned to, with the inset in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Left(f64),
    Right(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    Percent(f64),
    Px(f64),
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Percent(value) => write!(f, "{}%", value),
            Offset::Px(value) => write!(f, "{}px", value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementDescriptor {
    pub phase: CardPhase,
    pub anchor: Anchor,
    pub top: Offset,
    pub width_pct: f64,
    pub scale: f64,
    pub translate_x_px: f64,
    pub opacity: f64,
    pub z_index: i32,
}

impl PlacementDescriptor {
    /// Inline CSS declarations for this placement.
    pub fn to_style(&self) -> String {
        let (left, right) = match self.anchor {
            Anchor::Left(inset) => (format!("{}%", inset), "auto".to_string()),
            Anchor::Right(inset) => ("auto".to_string(), format!("{}%", inset)),
        };
        format!(
            "transform: scale({}) translateX({}px); opacity: {}; z-index: {}; left: {}; right: {}; top: {}; width: {}%;",
            self.scale,
            self.translate_x_px,
            self.opacity,
            self.z_index,
            left,
            right,
            self.top,
            self.width_pct,
        )
    }
}

/// Placement of card `index` while card `active` is shown, out of `card_count`.
///
/// Z-order is always Active > every Past > every Future, and past cards stack
/// downward as their index grows. An `active` past the last card selects the last card.
pub fn placement(index: usize, active: usize, card_count: usize) -> PlacementDescriptor {
    let count = card_count.max(index + 1);
    let phase = CardPhase::of(index, active.min(count - 1));
    let count = count as i32;

    match phase {
        CardPhase::Active => PlacementDescriptor {
            phase,
            anchor: Anchor::Left(EDGE_INSET_PCT),
            top: Offset::Percent(EDGE_INSET_PCT),
            width_pct: STAGE_WIDTH_PCT,
            scale: 1.0,
            translate_x_px: 0.0,
            opacity: 1.0,
            z_index: count + 6,
        },
        CardPhase::Past => PlacementDescriptor {
            phase,
            anchor: Anchor::Right(EDGE_INSET_PCT),
            top: Offset::Px(PAST_STACK_ORIGIN_PX + index as f64 * PAST_STACK_STEP_PX),
            width_pct: PAST_WIDTH_PCT,
            scale: PAST_SCALE,
            translate_x_px: 0.0,
            opacity: PAST_OPACITY,
            z_index: count + 1 - index as i32,
        },
        CardPhase::Future => PlacementDescriptor {
            phase,
            anchor: Anchor::Left(EDGE_INSET_PCT),
            top: Offset::Percent(EDGE_INSET_PCT),
            width_pct: STAGE_WIDTH_PCT,
            scale: FUTURE_SCALE,
            translate_x_px: FUTURE_SHIFT_PX,
            opacity: 0.0,
            z_index: 1,
        },
    }
}

/// Placements for every card, in card order.
pub fn layout(active: usize, card_count: usize) -> Vec<PlacementDescriptor> {
    (0..card_count)
        .map(|index| placement(index, active, card_count))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::scroll::ScrollState;

    #[test]
    fn test_reference_values_for_four_cards() {
        let active = placement(1, 1, 4);
        assert_eq!(active.phase, CardPhase::Active);
        assert_eq!(active.z_index, 10);
        assert_eq!(active.opacity, 1.0);
        assert_eq!(active.scale, 1.0);
        assert_eq!(active.anchor, Anchor::Left(5.0));

        let past = placement(0, 1, 4);
        assert_eq!(past.phase, CardPhase::Past);
        assert_eq!(past.z_index, 5);
        assert_eq!(past.scale, 0.25);
        assert_eq!(past.opacity, 0.9);
        assert_eq!(past.top, Offset::Px(-20.0));
        assert_eq!(past.anchor, Anchor::Right(5.0));

        let future = placement(3, 1, 4);
        assert_eq!(future.phase, CardPhase::Future);
        assert_eq!(future.z_index, 1);
        assert_eq!(future.opacity, 0.0);
        assert_eq!(future.scale, 0.8);
        assert_eq!(future.translate_x_px, 100.0);
    }

    #[test]
    fn test_partition_and_stacking_order() {
        for n in 1..=12 {
            for a in 0..n {
                let cards = layout(a, n);
                let active: Vec<_> = cards.iter().filter(|c| c.phase == CardPhase::Active).collect();
                let past: Vec<_> = cards.iter().filter(|c| c.phase == CardPhase::Past).collect();
                let future: Vec<_> = cards.iter().filter(|c| c.phase == CardPhase::Future).collect();

                assert_eq!(active.len(), 1);
                assert_eq!(past.len(), a);
                assert_eq!(future.len(), n - 1 - a);

                let lowest_past = past.iter().map(|c| c.z_index).min().unwrap_or(i32::MAX);
                let highest_past = past.iter().map(|c| c.z_index).max().unwrap_or(i32::MIN);
                let highest_future = future.iter().map(|c| c.z_index).max().unwrap_or(i32::MIN);
                assert!(active[0].z_index > highest_past);
                assert!(lowest_past > highest_future);
            }
        }
    }

    #[test]
    fn test_past_stack_offsets_increase_with_index() {
        let cards = layout(7, 8);
        let tops: Vec<f64> = cards[..7]
            .iter()
            .map(|c| match c.top {
                Offset::Px(px) => px,
                Offset::Percent(_) => panic!("past card positioned in percent"),
            })
            .collect();
        assert!(tops.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(tops[2], 220.0);
    }

    #[test]
    fn test_scrolling_down_and_back_up_is_reversible() {
        let path = [
            0.0, 0.1, 0.3, 0.49, 0.55, 0.8, 0.99, 1.0, 0.76, 0.6, 0.26, 0.25, 0.2, 0.0,
        ];
        let mut seen: HashMap<usize, Vec<PlacementDescriptor>> = HashMap::new();
        let mut visited = Vec::new();

        for p in path {
            let state = ScrollState::from_progress(p, 4);
            let cards = layout(state.active_index, 4);
            visited.push(state.active_index);
            match seen.get(&state.active_index) {
                Some(first) => assert_eq!(first, &cards, "layout changed for a={} at p={}", state.active_index, p),
                None => {
                    seen.insert(state.active_index, cards);
                }
            }
        }

        assert_eq!(visited.iter().max(), Some(&3));
        assert_eq!(visited.last(), Some(&0));
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_active_past_the_end_selects_last_card() {
        for n in 1..=8 {
            for active in [n, n + 5] {
                let cards = layout(active, n);
                let actives: Vec<usize> = cards
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.phase == CardPhase::Active)
                    .map(|(i, _)| i)
                    .collect();
                assert_eq!(actives, vec![n - 1]);
                assert_eq!(cards, layout(n - 1, n));
            }
        }
    }

    #[test]
    fn test_style_string() {
        let style = placement(0, 2, 4).to_style();
        assert!(style.contains("transform: scale(0.25) translateX(0px)"));
        assert!(style.contains("opacity: 0.9"));
        assert!(style.contains("z-index: 5"));
        assert!(style.contains("left: auto"));
        assert!(style.contains("right: 5%"));
        assert!(style.contains("top: -20px"));

        let style = placement(3, 2, 4).to_style();
        assert!(style.contains("translateX(100px)"));
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("top: 5%"));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(CardPhase::of(0, 0).to_string(), "active");
        assert_eq!(CardPhase::of(0, 3).to_string(), "past");
        assert_eq!(CardPhase::of(3, 0).to_string(), "future");
    }
}
