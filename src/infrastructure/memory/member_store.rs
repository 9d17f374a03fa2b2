//! In-Memory Member Store Implementation

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::application::ports::{MemberStoreError, MemberStorePort};
use crate::domain::family::{Member, MemberId, NewMember};

/// 内存成员存储
///
/// id 严格递增分配，因此按 id 排序即为插入顺序
pub struct InMemoryMemberStore {
    last_name: String,
    /// member_id -> Member
    members: DashMap<MemberId, Member>,
    /// 下一个待分配的 id
    next_id: AtomicU64,
}

impl InMemoryMemberStore {
    pub fn new(last_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            members: DashMap::new(),
            next_id: AtomicU64::new(MemberId::FIRST.value()),
        }
    }

    /// 创建并按顺序添加初始成员
    pub fn with_members(
        last_name: impl Into<String>,
        members: impl IntoIterator<Item = NewMember>,
    ) -> Result<Self, MemberStoreError> {
        let store = Self::new(last_name);
        for member in members {
            store.add(member)?;
        }
        Ok(store)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn allocate_id(&self) -> Result<MemberId, MemberStoreError> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                MemberId::new(current).next().map(|next| next.value())
            })
            .map(MemberId::new)
            .map_err(|current| MemberStoreError::IdSpaceExhausted(MemberId::new(current)))
    }
}

impl MemberStorePort for InMemoryMemberStore {
    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn list_all(&self) -> Vec<Member> {
        let mut members: Vec<Member> = self
            .members
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        members.sort_by_key(|m| m.id());
        members
    }

    fn get_by_id(&self, id: MemberId) -> Option<Member> {
        let member = self.members.get(&id).map(|m| m.clone());
        tracing::debug!(member_id = %id, found = member.is_some(), "Member lookup");
        member
    }

    fn add(&self, input: NewMember) -> Result<Member, MemberStoreError> {
        let id = self.allocate_id()?;
        let member = Member::new(id, input);
        self.members.insert(id, member.clone());
        tracing::debug!(member_id = %id, family = %self.last_name, "Member stored");
        Ok(member)
    }

    fn delete(&self, id: MemberId) -> Option<Member> {
        self.members.remove(&id).map(|(_, member)| {
            tracing::debug!(member_id = %id, family = %self.last_name, "Member removed");
            member
        })
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn homer() -> NewMember {
        NewMember::new("Homer", 42, vec![4, 8, 15])
    }

    fn marge() -> NewMember {
        NewMember::new("Marge", 40, vec![7])
    }

    #[test]
    fn test_member_lifecycle() {
        let store = InMemoryMemberStore::new("Jackson");

        // Add
        let first = store.add(homer()).unwrap();
        let second = store.add(marge()).unwrap();
        assert_eq!(first.id().value(), 1);
        assert_eq!(second.id().value(), 2);

        // List
        let ids: Vec<u64> = store.list_all().iter().map(|m| m.id().value()).collect();
        assert_eq!(ids, vec![1, 2]);

        // Delete
        let removed = store.delete(first.id()).unwrap();
        assert_eq!(removed, first);
        let ids: Vec<u64> = store.list_all().iter().map(|m| m.id().value()).collect();
        assert_eq!(ids, vec![2]);

        // Get after delete
        assert!(store.get_by_id(first.id()).is_none());
    }

    #[test]
    fn test_get_returns_created_record() {
        let store = InMemoryMemberStore::new("Jackson");
        let created = store.add(homer()).unwrap();

        assert_eq!(store.get_by_id(created.id()), Some(created));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = InMemoryMemberStore::new("Jackson");
        let first = store.add(homer()).unwrap();
        store.delete(first.id());

        let next = store.add(marge()).unwrap();
        assert_eq!(next.id().value(), 2);
    }

    #[test]
    fn test_delete_missing_leaves_collection_unchanged() {
        let store = InMemoryMemberStore::new("Jackson");
        store.add(homer()).unwrap();
        let before = store.list_all();

        assert!(store.delete(MemberId::new(42)).is_none());
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn test_len_tracks_adds_and_deletes() {
        let store = InMemoryMemberStore::new("Jackson");
        assert!(store.is_empty());

        let ids: Vec<MemberId> = (0..5)
            .map(|i| store.add(NewMember::new(format!("kid{}", i), i, vec![])).unwrap().id())
            .collect();
        store.delete(ids[1]);
        store.delete(ids[3]);
        store.delete(MemberId::new(100));

        assert_eq!(store.len(), 3);
        assert_eq!(store.list_all().len(), 3);
    }

    #[test]
    fn test_with_members_seeds_in_order() {
        let store = InMemoryMemberStore::with_members("Simpson", vec![homer(), marge()]).unwrap();

        assert_eq!(store.last_name(), "Simpson");
        let names: Vec<String> = store
            .list_all()
            .iter()
            .map(|m| m.first_name().to_string())
            .collect();
        assert_eq!(names, vec!["Homer", "Marge"]);
    }

    #[test]
    fn test_id_space_exhausted() {
        let store = InMemoryMemberStore::new("Jackson");
        store.next_id.store(u64::MAX, Ordering::SeqCst);

        let result = store.add(homer());
        assert!(matches!(result, Err(MemberStoreError::IdSpaceExhausted(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_adds_yield_unique_ids() {
        let store = InMemoryMemberStore::new("Jackson");

        std::thread::scope(|scope| {
            for t in 0..4 {
                let store = &store;
                scope.spawn(move || {
                    for i in 0..50 {
                        store
                            .add(NewMember::new(format!("m{}-{}", t, i), i, vec![t]))
                            .unwrap();
                    }
                });
            }
        });

        let ids: Vec<u64> = store.list_all().iter().map(|m| m.id().value()).collect();
        assert_eq!(ids.len(), 200);
        assert_eq!(ids, (1..=200).collect::<Vec<u64>>());
    }
}
