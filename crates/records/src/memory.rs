use super::*;
use flippy_auth::Member;
use flippy_core::ID;
use flippy_core::Unique;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process score store for offline play and tests.
///
/// Usernames come from members announced through [`Memory::enroll`];
/// anyone else shows up on the leaderboard as `anonymous`.
#[derive(Debug, Default)]
pub struct Memory {
    names: RwLock<HashMap<ID<Member>, String>>,
    scores: RwLock<Vec<Score>>,
}

impl Memory {
    pub async fn enroll(&self, member: &Member) {
        self.names
            .write()
            .await
            .insert(member.id(), member.username().to_string());
    }
    pub async fn len(&self) -> usize {
        self.scores.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.scores.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ScoreStore for Memory {
    async fn save(&self, score: &Score) -> anyhow::Result<()> {
        self.scores.write().await.push(score.clone());
        Ok(())
    }
    async fn list_top(&self, limit: usize) -> anyhow::Result<Vec<Standing>> {
        let names = self.names.read().await;
        let mut scores = self.scores.read().await.clone();
        scores.sort_by(rank);
        Ok(scores
            .into_iter()
            .take(limit)
            .map(|s| {
                let name = names
                    .get(&s.user())
                    .cloned()
                    .unwrap_or_else(|| String::from("anonymous"));
                Standing::new(name, s)
            })
            .collect())
    }
    async fn list_mine(&self, user: ID<Member>) -> anyhow::Result<Vec<Score>> {
        let mut mine = self
            .scores
            .read()
            .await
            .iter()
            .filter(|s| s.user() == user)
            .cloned()
            .collect::<Vec<_>>();
        mine.sort_by(rank);
        Ok(mine)
    }
    async fn summary(&self, user: ID<Member>) -> anyhow::Result<Summary> {
        let history = self
            .scores
            .read()
            .await
            .iter()
            .filter(|s| s.user() == user)
            .cloned()
            .collect::<Vec<_>>();
        Ok(Summary::from(&history[..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flippy_engine::Difficulty;

    fn member(name: &str) -> Member {
        Member::new(ID::default(), name.into(), format!("{}@flip.py", name))
    }

    #[tokio::test]
    async fn leaderboard_is_ranked_and_limited() {
        let store = Memory::default();
        let ann = member("ann");
        store.enroll(&ann).await;
        for moves in [40, 16, 30] {
            let score = Score::new(ann.id(), Difficulty::Easy, moves, 60);
            store.save(&score).await.unwrap();
        }
        let top = store.list_top(2).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].score.moves(), 16);
        assert_eq!(top[1].score.moves(), 30);
        assert!(top.iter().all(|s| s.username == "ann"));
    }

    #[tokio::test]
    async fn strangers_are_anonymous() {
        let store = Memory::default();
        let score = Score::new(ID::default(), Difficulty::Hard, 36, 100);
        store.save(&score).await.unwrap();
        assert_eq!(store.list_top(10).await.unwrap()[0].username, "anonymous");
    }

    #[tokio::test]
    async fn mine_only_holds_mine() {
        let store = Memory::default();
        let (ann, bob) = (member("ann"), member("bob"));
        store.save(&Score::new(ann.id(), Difficulty::Easy, 20, 30)).await.unwrap();
        store.save(&Score::new(bob.id(), Difficulty::Easy, 18, 30)).await.unwrap();
        store.save(&Score::new(ann.id(), Difficulty::Hard, 40, 90)).await.unwrap();
        let mine = store.list_mine(ann.id()).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|s| s.user() == ann.id()));
        assert!(mine[0].score() >= mine[1].score());
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn summary_reads_history() {
        let store = Memory::default();
        let ann = member("ann");
        assert_eq!(store.summary(ann.id()).await.unwrap(), Summary::default());
        store.save(&Score::new(ann.id(), Difficulty::Hard, 40, 90)).await.unwrap();
        let summary = store.summary(ann.id()).await.unwrap();
        assert_eq!(summary.total_games, 1);
        assert_eq!(summary.most_played, Difficulty::Hard);
    }
}
