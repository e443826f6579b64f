//! 出現回数の集計
//!
//! 同数の場合は最初に出現した順を保つ。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// 値と出現回数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountEntry<K> {
    pub value: K,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct Counter<K> {
    order: Vec<K>,
    counts: HashMap<K, usize>,
    total: usize,
}

impl<K> Default for Counter<K> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash + Clone> Counter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        self.total += 1;
        match self.counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                self.order.push(key.clone());
                self.counts.insert(key, 1);
            }
        }
    }

    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// 追加した総数（重複込み）
    pub fn total(&self) -> usize {
        self.total
    }

    /// 異なる値の数
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// 出現回数の多い順に最大 `n` 件（None なら全件）
    pub fn most_common(&self, n: Option<usize>) -> Vec<CountEntry<K>> {
        let mut entries: Vec<CountEntry<K>> = self
            .order
            .iter()
            .map(|key| CountEntry {
                value: key.clone(),
                count: self.counts[key],
            })
            .collect();

        // 安定ソートなので同数は出現順のまま
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        if let Some(n) = n {
            entries.truncate(n);
        }
        entries
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_common_order() {
        let counter: Counter<&str> = ["b", "a", "c", "a", "c", "d"].into_iter().collect();
        let top = counter.most_common(None);

        let values: Vec<&str> = top.iter().map(|e| e.value).collect();
        assert_eq!(values, vec!["a", "c", "b", "d"]);
        assert_eq!(top[0].count, 2);
    }

    #[test]
    fn test_most_common_truncate() {
        let counter: Counter<&str> = ["x", "y", "y", "z"].into_iter().collect();
        let top = counter.most_common(Some(2));
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], CountEntry { value: "y", count: 2 });
        assert_eq!(top[1].value, "x");
    }

    #[test]
    fn test_totals() {
        let counter: Counter<String> = ["a", "a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(counter.total(), 3);
        assert_eq!(counter.len(), 2);
        assert_eq!(counter.get(&"a".to_string()), 2);
        assert_eq!(counter.get(&"z".to_string()), 0);
        assert!(Counter::<String>::new().is_empty());
    }
}
