use tattler::{dispatch, Notifier, Outcome};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    fn load_greeting(name: &str) -> Outcome<String, String> {
        if name.is_empty() {
            return Outcome::Failure("no name given".to_string());
        }
        Outcome::Success(format!("hello, {}", name))
    }

    let notifier = Notifier::new()
        .on_success(|greeting: String| println!("{}", greeting))
        .on_failure(|error: String| eprintln!("failed: {}", error));

    // Work and observers on the calling thread.
    notifier.notify(|| load_greeting("world"));

    // Work on a worker thread, outcome routed back here.
    dispatch::spawn(|| load_greeting("")).deliver(&notifier)?;

    Ok(())
}
