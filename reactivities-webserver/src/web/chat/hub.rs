use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use parking_lot::Mutex;
use rocket::tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

pub type ConnectionId = u64;

#[derive(Debug, Default)]
struct Registry {
    next_id: ConnectionId,
    connections: HashMap<ConnectionId, UnboundedSender<String>>,
    groups: HashMap<String, HashSet<ConnectionId>>,
}

impl Registry {
    fn remove_connection(&mut self, id: ConnectionId) {
        self.connections.remove(&id);
        self.groups.retain(|_, members| {
            members.remove(&id);
            !members.is_empty()
        });
    }
}

/// Live realtime connections and their group memberships.
///
/// Every connection owns the receiving end of an unbounded
/// channel. Messages are serialized once and fanned out as
/// text to all members of a group.
#[derive(Debug, Clone, Default)]
pub struct Hub(Arc<Mutex<Registry>>);

impl Hub {
    pub fn connect(&self) -> (ConnectionId, UnboundedReceiver<String>) {
        let (tx, rx) = unbounded_channel();
        let mut registry = self.0.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.connections.insert(id, tx);
        (id, rx)
    }

    pub fn disconnect(&self, id: ConnectionId) {
        self.0.lock().remove_connection(id);
    }

    pub fn add_to_group(&self, id: ConnectionId, group: &str) {
        let mut registry = self.0.lock();
        if !registry.connections.contains_key(&id) {
            warn!("Cannot add unknown connection {id} to group {group}");
            return;
        }
        registry
            .groups
            .entry(group.to_owned())
            .or_default()
            .insert(id);
    }

    pub fn remove_from_group(&self, id: ConnectionId, group: &str) {
        let mut registry = self.0.lock();
        if let Some(members) = registry.groups.get_mut(group) {
            members.remove(&id);
            if members.is_empty() {
                registry.groups.remove(group);
            }
        }
    }

    /// Returns the number of connections that received the message.
    pub fn broadcast(&self, group: &str, msg: &str) -> usize {
        let mut registry = self.0.lock();
        let Some(members) = registry.groups.get(group) else {
            return 0;
        };
        let mut delivered = 0;
        let mut closed = vec![];
        for id in members {
            match registry.connections.get(id) {
                Some(tx) if tx.send(msg.to_owned()).is_ok() => delivered += 1,
                _ => closed.push(*id),
            }
        }
        for id in closed {
            debug!("Pruning closed connection {id}");
            registry.remove_connection(id);
        }
        delivered
    }

    pub fn group_size(&self, group: &str) -> usize {
        self.0.lock().groups.get(group).map_or(0, HashSet::len)
    }
}
