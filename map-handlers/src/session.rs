//! Per-user session state: marker color and ad-hoc map points.

use std::collections::HashMap;

use map_renderer::{MapPoint, MarkerColor};
use tokio::sync::RwLock;

/// Points kept per user; older points drop off once a session is full.
pub const MAX_POINTS_PER_SESSION: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub marker_color: MarkerColor,
    pub points: Vec<MapPoint>,
}

/// Sessions keyed by user id. Users without a session see the default color and no points.
#[derive(Debug)]
pub struct SessionStore {
    default_color: MarkerColor,
    sessions: RwLock<HashMap<i64, Session>>,
}

impl SessionStore {
    pub fn new(default_color: MarkerColor) -> Self {
        Self {
            default_color,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    fn fresh(&self) -> Session {
        Session {
            marker_color: self.default_color.clone(),
            points: Vec::new(),
        }
    }

    /// Snapshot of the user's session.
    pub async fn get(&self, user_id: i64) -> Session {
        self.sessions
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| self.fresh())
    }

    pub async fn marker_color(&self, user_id: i64) -> MarkerColor {
        self.get(user_id).await.marker_color
    }

    pub async fn set_color(&self, user_id: i64, color: MarkerColor) {
        let mut sessions = self.sessions.write().await;
        sessions.entry(user_id).or_insert_with(|| self.fresh()).marker_color = color;
    }

    /// Appends a point and returns the updated session. A full session drops its oldest point.
    pub async fn push_point(&self, user_id: i64, point: MapPoint) -> Session {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(user_id).or_insert_with(|| self.fresh());
        if session.points.len() >= MAX_POINTS_PER_SESSION {
            let overflow = session.points.len() + 1 - MAX_POINTS_PER_SESSION;
            session.points.drain(..overflow);
        }
        session.points.push(point);
        session.clone()
    }

    /// Removes the user's points; returns how many there were. The color is kept.
    pub async fn clear_points(&self, user_id: i64) -> usize {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&user_id) {
            Some(session) => std::mem::take(&mut session.points).len(),
            None => 0,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(MarkerColor::default())
    }
}
