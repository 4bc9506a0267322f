//=========================================================================
// Transition Queue
//=========================================================================
//
// Queue for scene transition requests.
//
// Scenes queue transitions here during update. The engine applies the
// queue once per frame, right after the active scene's update returns.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SceneKey;

//=== Scene Transition ====================================================

/// A scene-issued request applied at the end of the update step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition<K: SceneKey> {
    /// Makes the scene registered under the key active.
    Activate(K),

    /// Stops the loop after the current frame.
    Quit,
}

//=== Transition Queue ====================================================

/// FIFO of transition requests issued during one update.
#[derive(Debug)]
pub struct TransitionQueue<K: SceneKey> {
    queue: Vec<SceneTransition<K>>,
}

impl<K: SceneKey> TransitionQueue<K> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition to be applied after the current update.
    pub fn push(&mut self, transition: SceneTransition<K>) {
        self.queue.push(transition);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all transitions from the queue in request order, leaving it
    /// empty.
    pub fn take(&mut self) -> Vec<SceneTransition<K>> {
        std::mem::take(&mut self.queue)
    }
}

impl<K: SceneKey> Default for TransitionQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
    }

    impl SceneKey for TestScene {}

    #[test]
    fn take_preserves_request_order() {
        let mut queue = TransitionQueue::new();
        queue.push(SceneTransition::Activate(TestScene::A));
        queue.push(SceneTransition::Quit);
        queue.push(SceneTransition::Activate(TestScene::B));

        assert_eq!(
            queue.take(),
            vec![
                SceneTransition::Activate(TestScene::A),
                SceneTransition::Quit,
                SceneTransition::Activate(TestScene::B),
            ]
        );
    }

    #[test]
    fn take_leaves_queue_empty() {
        let mut queue = TransitionQueue::new();
        queue.push(SceneTransition::<TestScene>::Quit);
        assert_eq!(queue.len(), 1);

        queue.take();

        assert!(queue.is_empty());
        assert!(queue.take().is_empty());
    }
}
