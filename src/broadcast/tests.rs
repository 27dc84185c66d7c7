use super::*;

type Bus = Broadcaster<(i32,)>;

fn subscribe_named(bus: &Bus, receiver: &Rc<NamedReceiver>) {
    bus.subscribe(Handler::method(receiver, NamedReceiver::on_value))
        .expect("subscribing failed");
}

#[test]
fn raise_prune_raise() {
    let log = CallLog::new();
    let a = NamedReceiver::new("a", &log);
    let b = NamedReceiver::new("b", &log);
    let bus = Bus::new();
    subscribe_named(&bus, &a);
    subscribe_named(&bus, &b);
    bus.raise((42,));
    assert_eq!(log.entries(), vec!["a:42", "b:42"]);
    drop(a);
    assert_eq!(bus.prune(), 1);
    bus.raise((7,));
    assert_eq!(log.entries(), vec!["a:42", "b:42", "b:7"]);
}

#[test]
fn unsubscribing_twice_is_harmless() {
    let log = CallLog::new();
    let r = NamedReceiver::new("r", &log);
    let bus = Bus::new();
    let handler = Handler::method(&r, NamedReceiver::on_value);
    bus.subscribe(handler.clone()).expect("subscribing failed");
    bus.subscribe(handler.clone()).expect("subscribing failed");
    bus.unsubscribe(&handler);
    bus.unsubscribe(&handler);
    bus.raise((1,));
    assert!(log.entries().is_empty());
    assert!(bus.is_empty());
}

#[test]
fn destroyed_host_object_is_skipped_while_still_referenced() {
    let object = MockHostObject::new();
    let bus = Bus::new();
    let action = WeakAction::new(Handler::host_method(&object, MockHostObject::on_value))
        .expect("creating action failed");
    bus.subscribe(Handler::host_method(&object, MockHostObject::on_value))
        .expect("subscribing failed");
    bus.raise((1,));
    object.destroy();
    bus.raise((2,));
    assert_eq!(object.values(), vec![1]);
    assert!(!action.is_alive());
    assert!(!action.invoke((3,)));
    assert!(bus.is_empty());
}

#[test]
fn null_receiver_can_not_be_subscribed() {
    let bus = Bus::new();
    let result = bus.subscribe(Handler::method(
        &rc::Weak::<NamedReceiver>::new(),
        NamedReceiver::on_value,
    ));
    assert!(matches!(result, Err(WeakEventError::InvalidCallable(_))));
    assert!(bus.is_empty());
}

#[test]
fn capturing_closure_can_not_be_subscribed() {
    let log = CallLog::new();
    let r = NamedReceiver::new("r", &log);
    let offset = 10;
    let bus = Bus::new();
    let result = bus.subscribe(Handler::method(&r, move |r: &NamedReceiver, x: i32| {
        r.on_value(x + offset)
    }));
    assert!(matches!(
        result,
        Err(WeakEventError::UnsupportedCallableShape(_))
    ));
    assert!(bus.is_empty());
}

#[test]
fn non_capturing_closure_can_be_unsubscribed_by_the_same_closure() {
    let log = CallLog::new();
    let r = NamedReceiver::new("r", &log);
    let bus = Bus::new();
    let handler = Handler::method(&r, |r: &NamedReceiver, x: i32| r.on_value(x * 2));
    bus.subscribe(handler.clone()).expect("subscribing failed");
    bus.raise((4,));
    bus.unsubscribe(&handler);
    bus.raise((5,));
    assert_eq!(log.entries(), vec!["r:8"]);
}

/// Subscribes and unsubscribes another receiver on the bus it is raised from
struct Recruiter {
    bus: Rc<Bus>,
    recruit: Rc<NamedReceiver>,
}

impl Recruiter {
    fn recruit(&self, _: i32) {
        subscribe_named(&self.bus, &self.recruit);
    }

    fn dismiss(&self, _: i32) {
        self.bus
            .unsubscribe(&Handler::method(&self.recruit, NamedReceiver::on_value));
    }
}

#[test]
fn recruit_subscribed_during_raise_is_first_raised_next_time() {
    let log = CallLog::new();
    let bus = Rc::new(Bus::new());
    let recruiter = Rc::new(Recruiter {
        bus: bus.clone(),
        recruit: NamedReceiver::new("recruit", &log),
    });
    bus.subscribe(Handler::method(&recruiter, Recruiter::recruit))
        .expect("subscribing failed");
    bus.raise((1,));
    assert!(log.entries().is_empty());
    bus.unsubscribe(&Handler::method(&recruiter, Recruiter::recruit));
    bus.raise((2,));
    assert_eq!(log.entries(), vec!["recruit:2"]);
}

#[test]
fn recruit_dismissed_during_raise_is_not_raised() {
    let log = CallLog::new();
    let bus = Rc::new(Bus::new());
    let recruit = NamedReceiver::new("recruit", &log);
    let recruiter = Rc::new(Recruiter {
        bus: bus.clone(),
        recruit: recruit.clone(),
    });
    bus.subscribe(Handler::method(&recruiter, Recruiter::dismiss))
        .expect("subscribing failed");
    subscribe_named(&bus, &recruit);
    bus.raise((1,));
    assert!(log.entries().is_empty());
    assert_eq!(bus.len(), 1);
}
