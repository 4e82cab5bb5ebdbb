//! Dry-run preview synthesis.
//!
//! Pure function of `(provider, project name)`: a fixed shape of three
//! synthetic resources (compute, managed database, managed container
//! cluster) tagged with the project name. Same inputs, byte-identical
//! output — the golden tests depend on that.

use crate::types::Provider;
use serde::{Deserialize, Serialize};

/// One simulated resource in a dry-run preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePreview {
    pub id: String,
    pub name: String,
    /// Service type label, e.g. "Compute Engine".
    pub kind: String,
    pub region: String,
    /// Estimated monthly cost in cents, exact for summation.
    pub monthly_cost_cents: u64,
    /// Ordered spec pairs for display.
    pub specs: Vec<(String, String)>,
}

impl ResourcePreview {
    /// Cost formatted the way the review surface displays it.
    pub fn display_cost(&self) -> String {
        format!(
            "${}.{:02}/month",
            self.monthly_cost_cents / 100,
            self.monthly_cost_cents % 100
        )
    }
}

/// The outcome of a dry run: what would be created, and what it would cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DryRunPreview {
    pub provider: Provider,
    pub project_name: String,
    pub resources: Vec<ResourcePreview>,
    /// Sum of the individual resource costs, in cents.
    pub total_monthly_cost_cents: u64,
}

impl DryRunPreview {
    pub fn display_total_cost(&self) -> String {
        format!(
            "${}.{:02}",
            self.total_monthly_cost_cents / 100,
            self.total_monthly_cost_cents % 100
        )
    }
}

struct ResourceTemplate {
    id_suffix: &'static str,
    name_suffix: &'static str,
    kind: &'static str,
    region: &'static str,
    cost_cents: u64,
    specs: &'static [(&'static str, &'static str)],
}

const GCP_RESOURCES: &[ResourceTemplate] = &[
    ResourceTemplate {
        id_suffix: "web-server",
        name_suffix: "web-server",
        kind: "Compute Engine",
        region: "us-central1-a",
        cost_cents: 2467,
        specs: &[
            ("Machine Type", "e2-medium"),
            ("vCPUs", "1"),
            ("Memory", "4 GB"),
            ("Disk", "20 GB SSD"),
            ("Network", "10 Gbps"),
        ],
    },
    ResourceTemplate {
        id_suffix: "database",
        name_suffix: "postgres-db",
        kind: "Cloud SQL",
        region: "us-central1",
        cost_cents: 4530,
        specs: &[
            ("Engine", "PostgreSQL 13"),
            ("Instance Class", "db-f1-micro"),
            ("Storage", "100 GB SSD"),
            ("Connections", "100 max"),
            ("Backup", "Automated"),
        ],
    },
    ResourceTemplate {
        id_suffix: "k8s-cluster",
        name_suffix: "gke-cluster",
        kind: "Google Kubernetes Engine",
        region: "us-central1",
        cost_cents: 7300,
        specs: &[
            ("Nodes", "3"),
            ("Machine Type", "e2-medium"),
            ("Kubernetes", "v1.27.3"),
            ("Auto Scaling", "Enabled"),
            ("Load Balancer", "Included"),
        ],
    },
];

const AWS_RESOURCES: &[ResourceTemplate] = &[
    ResourceTemplate {
        id_suffix: "ec2-instance",
        name_suffix: "web-server",
        kind: "EC2 Instance",
        region: "us-east-1",
        cost_cents: 2990,
        specs: &[
            ("Instance Type", "t3.medium"),
            ("vCPUs", "2"),
            ("Memory", "4 GB"),
            ("Storage", "20 GB EBS"),
            ("Network", "Up to 5 Gbps"),
        ],
    },
    ResourceTemplate {
        id_suffix: "rds-database",
        name_suffix: "mysql-db",
        kind: "RDS Database",
        region: "us-east-1",
        cost_cents: 5220,
        specs: &[
            ("Engine", "MySQL 8.0"),
            ("Instance Class", "db.t3.micro"),
            ("Storage", "100 GB GP2"),
            ("Multi-AZ", "Enabled"),
            ("Backup", "7 days retention"),
        ],
    },
    ResourceTemplate {
        id_suffix: "eks-cluster",
        name_suffix: "eks-cluster",
        kind: "EKS Cluster",
        region: "us-east-1",
        cost_cents: 8550,
        specs: &[
            ("Nodes", "3"),
            ("Instance Type", "t3.medium"),
            ("Kubernetes", "v1.27"),
            ("Auto Scaling", "Enabled"),
            ("Fargate", "Available"),
        ],
    },
];

const AZURE_RESOURCES: &[ResourceTemplate] = &[
    ResourceTemplate {
        id_suffix: "vm",
        name_suffix: "web-vm",
        kind: "Virtual Machine",
        region: "East US",
        cost_cents: 3115,
        specs: &[
            ("Size", "Standard_B2s"),
            ("vCPUs", "2"),
            ("Memory", "4 GB"),
            ("Storage", "30 GB Premium SSD"),
            ("Network", "Accelerated"),
        ],
    },
    ResourceTemplate {
        id_suffix: "cosmosdb",
        name_suffix: "cosmos-db",
        kind: "Cosmos DB",
        region: "East US",
        cost_cents: 4875,
        specs: &[
            ("API", "SQL (Core)"),
            ("Consistency", "Session"),
            ("Throughput", "400 RU/s"),
            ("Storage", "Unlimited"),
            ("Global Distribution", "Available"),
        ],
    },
    ResourceTemplate {
        id_suffix: "aks-cluster",
        name_suffix: "aks-cluster",
        kind: "AKS Cluster",
        region: "East US",
        cost_cents: 7890,
        specs: &[
            ("Nodes", "3"),
            ("VM Size", "Standard_DS2_v2"),
            ("Kubernetes", "v1.27.1"),
            ("Auto Scaling", "Enabled"),
            ("Azure CNI", "Enabled"),
        ],
    },
];

fn templates_for(provider: Provider) -> &'static [ResourceTemplate] {
    match provider {
        Provider::Gcp => GCP_RESOURCES,
        Provider::Aws => AWS_RESOURCES,
        Provider::Azure => AZURE_RESOURCES,
    }
}

/// Synthesize the dry-run preview for a provider and project name.
pub fn synthesize_preview(provider: Provider, project_name: &str) -> DryRunPreview {
    let resources: Vec<ResourcePreview> = templates_for(provider)
        .iter()
        .map(|t| ResourcePreview {
            id: format!("{project_name}-{}", t.id_suffix),
            name: format!("{project_name}-{}", t.name_suffix),
            kind: t.kind.to_string(),
            region: t.region.to_string(),
            monthly_cost_cents: t.cost_cents,
            specs: t
                .specs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        })
        .collect();

    let total_monthly_cost_cents = resources.iter().map(|r| r.monthly_cost_cents).sum();

    DryRunPreview {
        provider,
        project_name: project_name.to_string(),
        resources,
        total_monthly_cost_cents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_three_resources() {
        for provider in Provider::ALL {
            let preview = synthesize_preview(provider, "demo");
            assert_eq!(preview.resources.len(), 3);
            let sum: u64 = preview.resources.iter().map(|r| r.monthly_cost_cents).sum();
            assert_eq!(preview.total_monthly_cost_cents, sum);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = synthesize_preview(Provider::Aws, "demo");
        let b = synthesize_preview(Provider::Aws, "demo");
        assert_eq!(a, b);

        let json_a = serde_json::to_string(&a).unwrap();
        let json_b = serde_json::to_string(&b).unwrap();
        assert_eq!(json_a, json_b);
    }

    #[test]
    fn test_gcp_golden() {
        let preview = synthesize_preview(Provider::Gcp, "demo");
        assert_eq!(preview.total_monthly_cost_cents, 14297);
        assert_eq!(preview.display_total_cost(), "$142.97");

        let compute = &preview.resources[0];
        assert_eq!(compute.id, "demo-web-server");
        assert_eq!(compute.kind, "Compute Engine");
        assert_eq!(compute.display_cost(), "$24.67/month");

        let database = &preview.resources[1];
        assert_eq!(database.name, "demo-postgres-db");
        assert_eq!(database.kind, "Cloud SQL");

        let cluster = &preview.resources[2];
        assert_eq!(cluster.name, "demo-gke-cluster");
        assert_eq!(cluster.monthly_cost_cents, 7300);
    }

    #[test]
    fn test_totals_per_provider() {
        assert_eq!(
            synthesize_preview(Provider::Aws, "p").total_monthly_cost_cents,
            16760
        );
        assert_eq!(
            synthesize_preview(Provider::Azure, "p").total_monthly_cost_cents,
            15880
        );
    }

    #[test]
    fn test_resources_tagged_with_project_name() {
        let preview = synthesize_preview(Provider::Azure, "acme");
        for resource in &preview.resources {
            assert!(resource.id.starts_with("acme-"), "{}", resource.id);
            assert!(resource.name.starts_with("acme-"), "{}", resource.name);
        }
    }
}
