fn main() -> anyhow::Result<()> {
    // Each action is a single blocking database round trip; one thread is
    // all the runtime ever needs.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(newsdesk::run())
}
