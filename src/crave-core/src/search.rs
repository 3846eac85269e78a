// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Client-side filtering over an already-fetched recommendation list.

use crate::recommendation::Recommendation;

/// Case-insensitive substring filter across dish name, restaurant name and
/// area. An empty query keeps every item. Pure containment with no
/// tokenizing, no fuzzing and no re-sorting, so it is safe to call on every
/// keystroke.
pub fn filter_recommendations<'a>(
    items: &'a [Recommendation],
    query: &str,
) -> Vec<&'a Recommendation> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|rec| {
            rec.dish_name.to_lowercase().contains(&query)
                || rec.restaurant_name.to_lowercase().contains(&query)
                || rec.area.to_lowercase().contains(&query)
        })
        .collect()
}
