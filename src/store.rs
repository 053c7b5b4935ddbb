// 🗄️ Receipt Store - in-memory, identifier-keyed, process lifetime
//
// Records are created once on insert and never mutated afterwards.
// All access goes through the lock; the map itself is never handed out.

use crate::error::{ReceiptError, Result};
use crate::receipt::{Receipt, ReceiptId, ReceiptPayload, ScoredReceipt};
use crate::scoring::calculate_points;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, ScoredReceipt>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `receipt` and store it under a fresh identifier.
    pub fn insert(&self, receipt: Receipt) -> ReceiptId {
        let points = calculate_points(&receipt);
        let mut receipts = self.receipts.write().unwrap_or_else(PoisonError::into_inner);

        // v4 collisions are not expected, but an id is never reused.
        let mut id = ReceiptId::new();
        while receipts.contains_key(&id) {
            id = ReceiptId::new();
        }

        receipts.insert(
            id,
            ScoredReceipt {
                id,
                receipt,
                points,
            },
        );
        debug!(%id, points, stored = receipts.len(), "receipt stored");

        id
    }

    /// Validate a raw payload, then insert it.
    pub fn process(&self, payload: ReceiptPayload) -> Result<ReceiptId> {
        let receipt = Receipt::try_from(payload)?;
        Ok(self.insert(receipt))
    }

    pub fn lookup(&self, id: &ReceiptId) -> Result<ScoredReceipt> {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| ReceiptError::NotFound(id.to_string()))
    }

    /// Look up by the textual id; text that is not an id is simply unknown.
    pub fn lookup_str(&self, id: &str) -> Result<ScoredReceipt> {
        let parsed: ReceiptId = id
            .parse()
            .map_err(|_| ReceiptError::NotFound(id.to_string()))?;
        self.lookup(&parsed)
    }

    pub fn len(&self) -> usize {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{corner_market_payload, target_payload, walgreens_payload};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_insert_then_lookup_returns_calculated_points() {
        let store = ReceiptStore::new();
        let receipt = Receipt::try_from(target_payload()).unwrap();
        let expected = calculate_points(&receipt);

        let id = store.insert(receipt.clone());
        let scored = store.lookup(&id).unwrap();

        assert_eq!(scored.id, id);
        assert_eq!(scored.points, expected);
        assert_eq!(scored.points, 28);
        assert_eq!(scored.receipt, receipt);
    }

    #[test]
    fn test_repeated_lookups_are_identical() {
        let store = ReceiptStore::new();
        let id = store.process(corner_market_payload()).unwrap();

        let first = store.lookup(&id).unwrap();
        let second = store.lookup(&id).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.points, 109);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = ReceiptStore::new();
        store.process(walgreens_payload()).unwrap();

        let unknown = ReceiptId::new();
        assert_eq!(
            store.lookup(&unknown),
            Err(ReceiptError::NotFound(unknown.to_string()))
        );
        assert!(matches!(
            store.lookup_str("not-a-receipt"),
            Err(ReceiptError::NotFound(_))
        ));
    }

    #[test]
    fn test_each_insert_gets_a_new_id() {
        let store = ReceiptStore::new();
        let a = store.process(target_payload()).unwrap();
        let b = store.process(target_payload()).unwrap();

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup_str(&a.to_string()).unwrap().points, 28);
    }

    #[test]
    fn test_invalid_payload_is_not_stored() {
        let store = ReceiptStore::new();
        let mut payload = walgreens_payload();
        payload.retailer = None;

        assert!(matches!(
            store.process(payload),
            Err(ReceiptError::Validation(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_inserts_are_all_kept() {
        let store = Arc::new(ReceiptStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..25)
                        .map(|_| store.process(corner_market_payload()).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: Vec<ReceiptId> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(store.len(), 200);
        for id in ids {
            assert_eq!(store.lookup(&id).unwrap().points, 109);
        }
    }
}
