use log::{error, info, warn};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    sync::{
        atomic::{AtomicI64, Ordering::SeqCst},
        Arc,
    },
};
use weak_events::{
    helpers::config::{build_config, MasterConfig},
    register_destroyable, Broadcaster, DestroyFlag, Destroyable, EventSource, Handler, WeakAction,
    WeakResult,
};
use weak_self::WeakSelf;

/// Adds up every value it sees
struct Tally {
    name: String,
    total: Cell<i64>,
}

impl Tally {
    fn new(name: String) -> Rc<Self> {
        Rc::new(Self {
            name,
            total: Cell::new(0),
        })
    }

    fn add(&self, value: i32) {
        self.total.set(self.total.get() + value as i64);
        info!("{} got {} (total {})", self.name, value, self.total.get());
    }
}

/// Stands in for an object owned by a host that can destroy it while we still hold references
struct Panel {
    destroyed: DestroyFlag,
    shown: RefCell<Vec<String>>,
}

impl Panel {
    fn show(&self, sender: &'static str, text: String) {
        info!("panel shows {:?} from {}", text, sender);
        self.shown.borrow_mut().push(text);
    }
}

impl Destroyable for Panel {
    fn is_destroyed(&self) -> bool {
        self.destroyed.is_destroyed()
    }
}

/// Subscribes itself on creation and is gone as soon as its last Arc is dropped
struct Auditor {
    weak_self: WeakSelf<Auditor>,
    raised: AtomicI64,
}

impl Auditor {
    fn new(ticks: &Broadcaster<()>) -> WeakResult<Arc<Self>> {
        let auditor = Arc::new(Self {
            weak_self: WeakSelf::new(),
            raised: AtomicI64::new(0),
        });
        auditor.weak_self.init(&auditor);
        ticks.subscribe(Handler::method(&auditor.weak_self.get(), Auditor::tick))?;
        Ok(auditor)
    }

    fn tick(&self) {
        self.raised.fetch_add(1, SeqCst);
    }
}

fn done() {
    info!("done notification");
}

fn run(conf: &MasterConfig) -> WeakResult<()> {
    register_destroyable::<Panel>();

    let values = Broadcaster::<(i32,)>::with_config(conf.list.clone());
    let mut tallies: Vec<_> = (0..conf.receivers)
        .map(|i| Tally::new(format!("tally {}", i)))
        .collect();
    for tally in &tallies {
        values.subscribe(Handler::method(tally, Tally::add))?;
    }
    values.raise((42,));
    if let Some(first) = tallies.first() {
        values.unsubscribe(&Handler::method(first, Tally::add));
    }
    let dropped = tallies.pop();
    drop(dropped);
    values.raise((7,));
    info!("{} handler(s) left after dropping a tally", values.len());

    let messages = EventSource::<&'static str, String>::with_config(conf.list.clone());
    let panel = Rc::new(Panel {
        destroyed: DestroyFlag::new(),
        shown: RefCell::new(Vec::new()),
    });
    messages.subscribe(Handler::method(&panel, Panel::show))?;
    messages.raise("demo", "hello".to_string());
    panel.destroyed.destroy();
    messages.raise("demo", "nobody sees this".to_string());
    info!(
        "panel showed {} message(s), {} handler(s) left",
        panel.shown.borrow().len(),
        messages.len()
    );

    let ticks = Broadcaster::<()>::with_config(conf.list.clone());
    let auditor = Auditor::new(&ticks)?;
    ticks.raise(());
    ticks.raise(());
    info!("auditor saw {} tick(s)", auditor.raised.load(SeqCst));
    drop(auditor);
    ticks.raise(());

    let notify_done = WeakAction::new(Handler::function(done))?;
    if !notify_done.invoke(()) {
        warn!("done notification did not run");
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let conf = match build_config(&args) {
        Ok(conf) => conf,
        Err(e) => {
            error!("configuration error: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if conf.happy_exit {
        return;
    }
    info!("running with {:?}", conf);
    if let Err(e) = run(&conf) {
        error!("{}", e);
        std::process::exit(1);
    }
}
