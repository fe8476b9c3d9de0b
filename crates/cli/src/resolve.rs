use crate::di;
use zonewire_domain::{Config, DnsQuery};

pub async fn run(
    config: &Config,
    record_type: &str,
    domain: &str,
    server: Option<&str>,
) -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::new();
    let query = DnsQuery::from_cli(
        record_type,
        domain,
        server,
        &config.resolver.public_servers,
        &mut rng,
    )?;

    let resolution = di::resolve_use_case(&config.resolver)
        .execute(&query)
        .await?;

    println!("DNS server used: {}", resolution.server);
    for answer in &resolution.answers {
        println!("Domain: {}", answer.domain);
        println!("TTL: {}", answer.ttl);
        println!("Address: {}", answer.address);
    }

    Ok(())
}
