use super::*;
use crate::channel::FakeChannelAdapter;
use crate::session_store::MemorySessionStore;
use ag_core::hook_point::HookPoint;

fn notifier() -> Notifier<FakeChannelAdapter, MemorySessionStore> {
    Notifier::new(Arc::new(FakeChannelAdapter::new()), Arc::new(MemorySessionStore::new()))
}

#[tokio::test]
async fn main_agent_event_routes_through_its_own_session_key() {
    let n = notifier();
    let event = HookEvent::new(HookPoint::TurnPost, "agent:main:telegram:group:-100:topic:1", 0);
    n.notify_user(&event, "hello").await;
    assert_eq!(n.channel.calls().len(), 1);
    assert_eq!(n.channel.calls()[0].target.chat_id, "-100");
}

#[tokio::test]
async fn subagent_event_falls_back_to_remembered_main_session() {
    let n = notifier();
    let main_event = HookEvent::new(HookPoint::TurnPost, "agent:main:telegram:group:-100:topic:1", 0);
    n.record_main_session(&main_event).await;

    let sub_event = HookEvent::new(HookPoint::SubagentPost, "agent:main:subagent:abc", 0);
    n.notify_user(&sub_event, "from sub-agent").await;

    let calls = n.channel.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].target.chat_id, "-100");
}

#[tokio::test]
async fn subagent_event_falls_back_to_disk_when_memory_is_empty() {
    let store = Arc::new(MemorySessionStore::new());
    store.write("agent:main:telegram:group:-200").await;
    let n = Notifier::new(Arc::new(FakeChannelAdapter::new()), store);

    let sub_event = HookEvent::new(HookPoint::SubagentPost, "agent:main:subagent:abc", 0);
    n.notify_user(&sub_event, "from sub-agent").await;

    assert_eq!(n.channel.calls()[0].target.chat_id, "-200");
}

#[tokio::test]
async fn no_routable_target_never_panics_or_propagates() {
    let n = notifier();
    let sub_event = HookEvent::new(HookPoint::SubagentPost, "agent:main:subagent:abc", 0);
    n.notify_user(&sub_event, "unreachable").await;
    assert!(n.channel.calls().is_empty());
}

#[tokio::test]
async fn record_main_session_ignores_subagent_events() {
    let n = notifier();
    let sub_event = HookEvent::new(HookPoint::SubagentPost, "agent:main:subagent:abc", 0);
    n.record_main_session(&sub_event).await;
    assert_eq!(n.store.read().await, None);
}
