//! Multi-criterion card sorting.
//!
//! The default comparator chain is loosely based on how ygopro's client
//! orders cards in deck view: display group first, then monster stats or
//! sub-type rank, then name.

use std::cmp::Ordering;

use crate::cards::{Card, CardDatabase, CardTypeCategory, Format};

use super::options::{SortingOptions, SortingOrder, SortingStrategy};

type CardComparator<'a> = Box<dyn Fn(&Card, &Card) -> Ordering + 'a>;

/// Sorts cards according to a [`SortingOptions`] value.
///
/// Holds a reference to the card database for sub-type rank lookups; the
/// database must yield a stable sub-type ordering per category for results
/// to be deterministic. `sort` is a pure function of its inputs and that
/// table, so a single service can be shared freely.
///
/// Two long-standing quirks of the comparator semantics are kept on
/// purpose rather than "fixed", since deck lists rendered by the tool have
/// always used them:
///
/// - The name comparator is inverted relative to the numeric ones:
///   [`SortingOrder::Desc`] yields ascending alphabetical order and
///   [`SortingOrder::Asc`] the reverse.
/// - The display-group key of the default strategy carries an extra
///   negation, so group blocks run opposite to the direction of the other
///   keys for any given order.
///
/// ## Example
///
/// ```
/// use deck_core::cards::{Card, CardType, CardTypeCategory, MemoryCardDatabase, Passcode};
/// use deck_core::sorting::{SortingOptions, SortingService, SortingStrategy};
///
/// let database = MemoryCardDatabase::new();
/// let service = SortingService::new(&database);
///
/// let card_type = CardType::new("Normal Monster", CardTypeCategory::Monster, 1);
/// let cards = vec![
///     Card::new(Passcode::parse("00000001").unwrap(), "Weak", card_type.clone())
///         .with_stats(Some(800), None, None),
///     Card::new(Passcode::parse("00000002").unwrap(), "Strong", card_type)
///         .with_stats(Some(3000), None, None),
/// ];
///
/// let sorted = service.sort(cards, &SortingOptions::new(SortingStrategy::Atk));
/// assert_eq!(sorted[0].name, "Strong");
/// ```
pub struct SortingService<'a> {
    card_database: &'a dyn CardDatabase,
}

impl<'a> SortingService<'a> {
    /// Create a sorting service backed by the given database.
    #[must_use]
    pub fn new(card_database: &'a dyn CardDatabase) -> Self {
        Self { card_database }
    }

    /// Sort a list of cards.
    ///
    /// Returns the same cards reordered; never filters, deduplicates, or
    /// mutates them. Cards with missing numeric data are compared as if
    /// the value were 0 (release strategies under ascending order use
    /// +infinity instead, so unreleased cards land last either way).
    ///
    /// The sort is stable and never panics: the default comparator chain
    /// is not a total order when cards of different categories share a
    /// sort group, so sorting runs through a merge sort that accepts any
    /// comparator instead of `slice::sort_by`, which rejects such
    /// comparators at runtime.
    #[must_use]
    pub fn sort(&self, cards: Vec<Card>, options: &SortingOptions) -> Vec<Card> {
        log::trace!(
            "Sorting {} cards by {:?} ({:?})",
            cards.len(),
            options.strategy,
            options.order
        );
        let comparator = self.find_comparator(options.strategy, options.order);
        merge_sort_by(cards, &comparator)
    }

    fn find_comparator(&self, strategy: SortingStrategy, order: SortingOrder) -> CardComparator<'_> {
        match strategy {
            SortingStrategy::Name => name_comparator(order),
            SortingStrategy::Atk => atk_comparator(order),
            SortingStrategy::Def => def_comparator(order),
            SortingStrategy::Level => level_comparator(order),
            SortingStrategy::Views => key_comparator(|card| card.views as i64, order),
            SortingStrategy::ReleaseTcg => release_comparator(Format::Tcg, order),
            SortingStrategy::ReleaseOcg => release_comparator(Format::Ocg, order),
            SortingStrategy::Default => self.default_comparator(order),
        }
    }

    /// Deck-view comparator: display group, then monster stats or sub-type
    /// rank, then name. Each sub-comparator applies the order modifier on
    /// its own.
    fn default_comparator(&self, order: SortingOrder) -> CardComparator<'_> {
        let sort_group_comparator = sort_group_comparator(order);
        let level_comparator = level_comparator(order);
        let atk_comparator = atk_comparator(order);
        let def_comparator = def_comparator(order);
        let sub_type_comparator = self.sub_type_comparator(order);
        let name_comparator = name_comparator(order);
        Box::new(move |a, b| {
            // First, sort after the sort group.
            if a.card_type.sort_group != b.card_type.sort_group {
                return sort_group_comparator(a, b);
            }

            // For monsters, sort by monster related attributes.
            if a.card_type.category == CardTypeCategory::Monster {
                if a.level != b.level {
                    return level_comparator(a, b);
                }
                if a.atk != b.atk {
                    return atk_comparator(a, b);
                }
                if a.def != b.def {
                    return def_comparator(a, b);
                }
            } else if a.sub_type != b.sub_type {
                // For non-monsters, sort just by sub-type.
                return sub_type_comparator(a, b);
            }

            // As the last step, sort by name.
            name_comparator(a, b)
        })
    }

    /// Ranks sub-types by their index in the category's canonical ordering.
    /// Unknown sub-types rank as -1, placing them first under descending
    /// order.
    fn sub_type_comparator(&self, order: SortingOrder) -> CardComparator<'_> {
        let database = self.card_database;
        Box::new(move |a, b| {
            let sub_types = database.get_sub_types(a.card_type.category);
            let rank_a = sub_type_rank(sub_types, &a.sub_type);
            let rank_b = sub_type_rank(sub_types, &b.sub_type);
            // Rank runs (a - b), the opposite subtraction direction from
            // the numeric keys.
            apply_order(rank_a.cmp(&rank_b), order)
        })
    }
}

/// Stable merge sort over cards.
///
/// The comparator chains mirror the shipped ordering semantics and are
/// not guaranteed to form a total order (the default strategy compares a
/// monster/spell pair with equal sort groups through different key paths
/// per side). `slice::sort_by` detects that and panics, so the sort is
/// done by hand with a merge that tolerates any comparator.
fn merge_sort_by<F>(cards: Vec<Card>, comparator: &F) -> Vec<Card>
where
    F: Fn(&Card, &Card) -> Ordering,
{
    if cards.len() <= 1 {
        return cards;
    }
    let mut left = cards;
    let right = left.split_off(left.len() / 2);
    let left = merge_sort_by(left, comparator);
    let right = merge_sort_by(right, comparator);
    merge(left, right, comparator)
}

fn merge<F>(left: Vec<Card>, right: Vec<Card>, comparator: &F) -> Vec<Card>
where
    F: Fn(&Card, &Card) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut next_left = left.next();
    let mut next_right = right.next();
    loop {
        match (next_left.take(), next_right.take()) {
            (Some(l), Some(r)) => {
                // Ties keep the left run's element first, so the sort
                // stays stable.
                if comparator(&r, &l) == Ordering::Less {
                    merged.push(r);
                    next_left = Some(l);
                    next_right = right.next();
                } else {
                    merged.push(l);
                    next_left = left.next();
                    next_right = Some(r);
                }
            }
            (Some(l), None) => {
                merged.push(l);
                merged.extend(left);
                return merged;
            }
            (None, Some(r)) => {
                merged.push(r);
                merged.extend(right);
                return merged;
            }
            (None, None) => return merged,
        }
    }
}

/// Applies the order modifier: descending keeps `(b - a)` semantics, the
/// ascending modifier of -1 reverses them.
fn apply_order(ordering: Ordering, order: SortingOrder) -> Ordering {
    match order {
        SortingOrder::Desc => ordering,
        SortingOrder::Asc => ordering.reverse(),
    }
}

fn key_comparator<'c, F>(selector: F, order: SortingOrder) -> CardComparator<'c>
where
    F: Fn(&Card) -> i64 + 'c,
{
    Box::new(move |a, b| apply_order(selector(b).cmp(&selector(a)), order))
}

fn atk_comparator<'c>(order: SortingOrder) -> CardComparator<'c> {
    key_comparator(|card| i64::from(card.atk.unwrap_or(0)), order)
}

fn def_comparator<'c>(order: SortingOrder) -> CardComparator<'c> {
    key_comparator(|card| i64::from(card.def.unwrap_or(0)), order)
}

fn level_comparator<'c>(order: SortingOrder) -> CardComparator<'c> {
    key_comparator(|card| i64::from(card.level.unwrap_or(0)), order)
}

/// The sort-group modifier carries an extra negation relative to every
/// other key, so group blocks run opposite to the global order direction.
/// Deck views rely on the resulting block order.
fn sort_group_comparator<'c>(order: SortingOrder) -> CardComparator<'c> {
    let inverted = match order {
        SortingOrder::Desc => SortingOrder::Asc,
        SortingOrder::Asc => SortingOrder::Desc,
    };
    Box::new(move |a, b| {
        apply_order(
            b.card_type.sort_group.cmp(&a.card_type.sort_group),
            inverted,
        )
    })
}

/// Missing releases fall back to 0 under descending order and +infinity
/// under ascending order, so unreleased cards sort last regardless of
/// direction.
fn release_comparator<'c>(format: Format, order: SortingOrder) -> CardComparator<'c> {
    let fallback = match order {
        SortingOrder::Asc => f64::INFINITY,
        SortingOrder::Desc => 0.0,
    };
    Box::new(move |a, b| {
        let key = |card: &Card| card.release.for_format(format).map_or(fallback, |t| t as f64);
        apply_order(key(b).total_cmp(&key(a)), order)
    })
}

/// Name ordering is inverted relative to the numeric keys: `Desc` yields
/// ascending alphabetical order, `Asc` the reverse.
fn name_comparator<'c>(order: SortingOrder) -> CardComparator<'c> {
    match order {
        SortingOrder::Desc => Box::new(|a, b| compare_names(&a.name, &b.name)),
        SortingOrder::Asc => Box::new(|a, b| compare_names(&b.name, &a.name)),
    }
}

/// Case-insensitive name comparison with a byte-order tiebreak. The
/// catalog's names are ASCII-dominant, so no collation tables are used.
fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

fn sub_type_rank(sub_types: &[String], sub_type: &str) -> i64 {
    sub_types
        .iter()
        .position(|candidate| candidate == sub_type)
        .map_or(-1, |index| index as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardType, Passcode};

    fn named(n: u32, name: &str) -> Card {
        let card_type = CardType::new("Spell Card", CardTypeCategory::Spell, 0);
        Card::new(Passcode::parse(&format!("{n:08}")).unwrap(), name, card_type)
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let cards = vec![named(1, "First"), named(2, "Second"), named(3, "Third")];

        let sorted = merge_sort_by(cards, &|_: &Card, _: &Card| Ordering::Equal);

        let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_merge_sort_tolerates_inconsistent_comparator() {
        let cards: Vec<Card> = (0..64).map(|i| named(i, "Card")).collect();

        // Always-Less violates every total-order law; the sort must still
        // terminate with a permutation.
        let sorted = merge_sort_by(cards, &|_: &Card, _: &Card| Ordering::Less);

        assert_eq!(sorted.len(), 64);
    }

    #[test]
    fn test_compare_names_case_insensitive() {
        assert_eq!(compare_names("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_names("Gamma", "beta"), Ordering::Greater);
        assert_eq!(compare_names("Same", "Same"), Ordering::Equal);
    }

    #[test]
    fn test_sub_type_rank() {
        let sub_types: Vec<String> = ["Normal Spell", "Field Spell"].map(String::from).into();
        assert_eq!(sub_type_rank(&sub_types, "Normal Spell"), 0);
        assert_eq!(sub_type_rank(&sub_types, "Field Spell"), 1);
        assert_eq!(sub_type_rank(&sub_types, "Equip Spell"), -1);
    }
}
