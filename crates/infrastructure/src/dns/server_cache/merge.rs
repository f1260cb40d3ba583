use resolvd_domain::DnsServerAddress;
use std::collections::HashSet;

/// Merges the three tiers into one deduplicated list.
///
/// Tier priority, highest first: expiring, runtime (flattened in supplied
/// order), default. The first occurrence of an address wins and keeps its
/// position; runtime and default tiers preserve supplied order exactly,
/// while the expiring tier's internal order is not significant.
///
/// Pure over its snapshots so it can be tested without timers running.
pub(super) fn merge_tiers<'a>(
    expiring: impl Iterator<Item = &'a DnsServerAddress>,
    runtime: &[Vec<DnsServerAddress>],
    default_servers: &[DnsServerAddress],
) -> Vec<DnsServerAddress> {
    let mut merged = Vec::new();
    let mut seen = HashSet::new();

    let tiers = expiring
        .copied()
        .chain(runtime.iter().flatten().copied())
        .chain(default_servers.iter().copied());
    for server in tiers {
        if seen.insert(server) {
            merged.push(server);
        }
    }

    merged
}
