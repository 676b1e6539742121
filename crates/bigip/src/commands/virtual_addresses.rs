//! Virtual address command handlers.

use tabled::Tabled;
use tracing::debug;

use bigip_api::{BigIpClient, VirtualAddress};

use crate::cli::{GlobalOpts, VirtualAddressesArgs, VirtualAddressesCommand};
use crate::error::CliError;
use crate::output::{self, yes_no};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct VirtualAddressRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
    #[tabled(rename = "ARP")]
    arp: String,
    #[tabled(rename = "ICMP Echo")]
    icmp_echo: String,
    #[tabled(rename = "Floating")]
    floating: String,
    #[tabled(rename = "Traffic Group")]
    traffic_group: String,
}

impl From<&VirtualAddress> for VirtualAddressRow {
    fn from(a: &VirtualAddress) -> Self {
        Self {
            name: a.name.clone(),
            address: util::or_dash(a.address.as_deref()),
            enabled: yes_no(a.enabled),
            arp: yes_no(a.arp),
            icmp_echo: yes_no(a.icmp_echo),
            floating: yes_no(a.floating),
            traffic_group: util::or_dash(a.traffic_group.as_deref()),
        }
    }
}

fn detail(a: &VirtualAddress) -> String {
    output::detail_lines(&[
        ("Name", Some(a.name.clone())),
        ("Full Path", a.full_path.clone()),
        ("Address", a.address.clone()),
        ("Mask", a.mask.clone()),
        ("Enabled", Some(yes_no(a.enabled))),
        ("ARP", Some(yes_no(a.arp))),
        ("ICMP Echo", Some(yes_no(a.icmp_echo))),
        ("Floating", Some(yes_no(a.floating))),
        ("Auto Delete", Some(yes_no(a.auto_delete))),
        ("Traffic Group", a.traffic_group.clone()),
        (
            "Inherited TG",
            Some(yes_no(a.inherited_traffic_group)),
        ),
        (
            "Connection Limit",
            a.connection_limit.map(|l| l.to_string()),
        ),
        ("Route Advert.", a.route_advertisement.clone()),
    ])
}

fn id(a: &VirtualAddress) -> String {
    a.full_path.clone().unwrap_or_else(|| a.name.clone())
}

/// Flag overrides from `virtual-addresses set`.
#[derive(Debug, Default)]
struct FlagChanges {
    enabled: Option<bool>,
    arp: Option<bool>,
    icmp_echo: Option<bool>,
    floating: Option<bool>,
}

impl FlagChanges {
    fn is_empty(&self) -> bool {
        self.enabled.is_none()
            && self.arp.is_none()
            && self.icmp_echo.is_none()
            && self.floating.is_none()
    }

    fn apply(&self, addr: &mut VirtualAddress) {
        if let Some(v) = self.enabled {
            addr.enabled = v;
        }
        if let Some(v) = self.arp {
            addr.arp = v;
        }
        if let Some(v) = self.icmp_echo {
            addr.icmp_echo = v;
        }
        if let Some(v) = self.floating {
            addr.floating = v;
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &BigIpClient,
    args: VirtualAddressesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        VirtualAddressesCommand::List => {
            let addrs = client.list_virtual_addresses().await?;
            let out = output::render_list(
                &global.output_format(),
                &addrs,
                |a| VirtualAddressRow::from(a),
                id,
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        VirtualAddressesCommand::Get { name } => {
            let addr = client.get_virtual_address(&name).await.map_err(|e| {
                util::not_found(e, "virtual address", &name, "virtual-addresses list")
            })?;
            let out = output::render_single(&global.output_format(), &addr, detail, id);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        VirtualAddressesCommand::Set {
            name,
            enabled,
            arp,
            icmp_echo,
            floating,
        } => {
            let changes = FlagChanges {
                enabled,
                arp,
                icmp_echo,
                floating,
            };
            if changes.is_empty() {
                return Err(CliError::Validation {
                    field: "flags".into(),
                    reason: "pass at least one of --enabled, --arp, --icmp-echo, --floating"
                        .into(),
                });
            }

            let mut addr = client.get_virtual_address(&name).await.map_err(|e| {
                util::not_found(e, "virtual address", &name, "virtual-addresses list")
            })?;
            changes.apply(&mut addr);
            debug!(?changes, "updating virtual address flags");

            let updated = client.modify_virtual_address(&name, &addr).await?;
            let out = output::render_single(&global.output_format(), &updated, detail, id);
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
