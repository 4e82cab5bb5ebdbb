//! Static catalog: which services each provider offers, and which variables
//! each service requires.
//!
//! Pure lookup over `'static` tables. No mutable state, safe to call from
//! any number of threads. Unknown service ids resolve to empty slices, not
//! errors — the wizard's guards decide what to do about that.

use crate::types::Provider;

/// Broad grouping of a catalog service, used for display ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Compute,
    Container,
    Database,
}

impl ServiceCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ServiceCategory::Compute => "Compute",
            ServiceCategory::Container => "Container",
            ServiceCategory::Database => "Database",
        }
    }
}

/// One selectable service in a provider's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub category: ServiceCategory,
}

/// Input widget kind for a variable or credential field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Password,
    Textarea,
}

/// One configuration variable a service requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub required: bool,
    pub default: Option<&'static str>,
}

/// One credential field a provider's configuration requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialFieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub required: bool,
    pub secret: bool,
    pub default: Option<&'static str>,
}

const GCP_SERVICES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "compute-engine",
        display_name: "Compute Engine",
        description: "Scalable virtual machines running in Google's data centers",
        category: ServiceCategory::Compute,
    },
    CatalogEntry {
        id: "gke",
        display_name: "Google Kubernetes Engine",
        description: "Managed Kubernetes service for containerized applications",
        category: ServiceCategory::Container,
    },
    CatalogEntry {
        id: "cloud-sql",
        display_name: "Cloud SQL",
        description: "Fully managed relational database service",
        category: ServiceCategory::Database,
    },
];

const AWS_SERVICES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "ec2",
        display_name: "Amazon EC2",
        description: "Secure and resizable compute capacity in the cloud",
        category: ServiceCategory::Compute,
    },
    CatalogEntry {
        id: "eks",
        display_name: "Amazon EKS",
        description: "Managed Kubernetes service",
        category: ServiceCategory::Container,
    },
    CatalogEntry {
        id: "rds",
        display_name: "Amazon RDS",
        description: "Managed relational database service",
        category: ServiceCategory::Database,
    },
];

const AZURE_SERVICES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "virtual-machines",
        display_name: "Virtual Machines",
        description: "On-demand, scalable computing resources",
        category: ServiceCategory::Compute,
    },
    CatalogEntry {
        id: "aks",
        display_name: "Azure Kubernetes Service",
        description: "Managed Kubernetes service",
        category: ServiceCategory::Container,
    },
    CatalogEntry {
        id: "cosmos-db",
        display_name: "Azure Cosmos DB",
        description: "Globally distributed, multi-model database service",
        category: ServiceCategory::Database,
    },
];

/// Services available for a provider, in display order.
pub fn services_for(provider: Provider) -> &'static [CatalogEntry] {
    match provider {
        Provider::Gcp => GCP_SERVICES,
        Provider::Aws => AWS_SERVICES,
        Provider::Azure => AZURE_SERVICES,
    }
}

/// Look up a service within a specific provider's catalog.
pub fn find_service(provider: Provider, service_id: &str) -> Option<&'static CatalogEntry> {
    services_for(provider).iter().find(|s| s.id == service_id)
}

/// Human-readable name for a service id, across all providers.
pub fn service_display_name(service_id: &str) -> Option<&'static str> {
    Provider::ALL
        .iter()
        .find_map(|p| find_service(*p, service_id))
        .map(|s| s.display_name)
}

/// Variable schema for a service, in input order. Unknown service ids
/// yield an empty slice.
pub fn variable_schema_for(service_id: &str) -> &'static [VariableSpec] {
    match service_id {
        "compute-engine" => &[
            VariableSpec {
                name: "instance_name",
                label: "Instance Name",
                input: InputKind::Text,
                required: true,
                default: None,
            },
            VariableSpec {
                name: "machine_type",
                label: "Machine Type",
                input: InputKind::Text,
                required: true,
                default: Some("e2-medium"),
            },
            VariableSpec {
                name: "zone",
                label: "Zone",
                input: InputKind::Text,
                required: true,
                default: Some("us-central1-a"),
            },
            VariableSpec {
                name: "image",
                label: "Image",
                input: InputKind::Text,
                required: true,
                default: Some("ubuntu-2004-lts"),
            },
        ],
        "gke" => &[
            VariableSpec {
                name: "cluster_name",
                label: "Cluster Name",
                input: InputKind::Text,
                required: true,
                default: None,
            },
            VariableSpec {
                name: "location",
                label: "Location",
                input: InputKind::Text,
                required: true,
                default: Some("us-central1"),
            },
            VariableSpec {
                name: "node_count",
                label: "Node Count",
                input: InputKind::Number,
                required: true,
                default: Some("3"),
            },
            VariableSpec {
                name: "machine_type",
                label: "Machine Type",
                input: InputKind::Text,
                required: true,
                default: Some("e2-medium"),
            },
        ],
        "cloud-sql" => &[
            VariableSpec {
                name: "instance_name",
                label: "Instance Name",
                input: InputKind::Text,
                required: true,
                default: None,
            },
            VariableSpec {
                name: "database_version",
                label: "Database Version",
                input: InputKind::Text,
                required: true,
                default: Some("POSTGRES_13"),
            },
            VariableSpec {
                name: "tier",
                label: "Tier",
                input: InputKind::Text,
                required: true,
                default: Some("db-f1-micro"),
            },
            VariableSpec {
                name: "region",
                label: "Region",
                input: InputKind::Text,
                required: true,
                default: Some("us-central1"),
            },
        ],
        "ec2" => &[
            VariableSpec {
                name: "instance_name",
                label: "Instance Name",
                input: InputKind::Text,
                required: true,
                default: None,
            },
            VariableSpec {
                name: "instance_type",
                label: "Instance Type",
                input: InputKind::Text,
                required: true,
                default: Some("t3.micro"),
            },
            VariableSpec {
                name: "ami_id",
                label: "AMI ID",
                input: InputKind::Text,
                required: true,
                default: Some("ami-0c02fb55956c7d316"),
            },
            VariableSpec {
                name: "availability_zone",
                label: "Availability Zone",
                input: InputKind::Text,
                required: true,
                default: Some("us-east-1a"),
            },
        ],
        "eks" => &[
            VariableSpec {
                name: "cluster_name",
                label: "Cluster Name",
                input: InputKind::Text,
                required: true,
                default: None,
            },
            VariableSpec {
                name: "region",
                label: "Region",
                input: InputKind::Text,
                required: true,
                default: Some("us-east-1"),
            },
            VariableSpec {
                name: "node_group_name",
                label: "Node Group Name",
                input: InputKind::Text,
                required: true,
                default: None,
            },
            VariableSpec {
                name: "instance_types",
                label: "Instance Types",
                input: InputKind::Text,
                required: true,
                default: Some("t3.medium"),
            },
        ],
        "rds" => &[
            VariableSpec {
                name: "db_instance_identifier",
                label: "DB Instance Identifier",
                input: InputKind::Text,
                required: true,
                default: None,
            },
            VariableSpec {
                name: "engine",
                label: "Engine",
                input: InputKind::Text,
                required: true,
                default: Some("postgres"),
            },
            VariableSpec {
                name: "instance_class",
                label: "Instance Class",
                input: InputKind::Text,
                required: true,
                default: Some("db.t3.micro"),
            },
            VariableSpec {
                name: "allocated_storage",
                label: "Allocated Storage (GB)",
                input: InputKind::Number,
                required: true,
                default: Some("20"),
            },
        ],
        "virtual-machines" => &[
            VariableSpec {
                name: "vm_name",
                label: "VM Name",
                input: InputKind::Text,
                required: true,
                default: None,
            },
            VariableSpec {
                name: "vm_size",
                label: "VM Size",
                input: InputKind::Text,
                required: true,
                default: Some("Standard_B1s"),
            },
            VariableSpec {
                name: "location",
                label: "Location",
                input: InputKind::Text,
                required: true,
                default: Some("East US"),
            },
            VariableSpec {
                name: "admin_username",
                label: "Admin Username",
                input: InputKind::Text,
                required: true,
                default: Some("azureuser"),
            },
        ],
        "aks" => &[
            VariableSpec {
                name: "cluster_name",
                label: "Cluster Name",
                input: InputKind::Text,
                required: true,
                default: None,
            },
            VariableSpec {
                name: "location",
                label: "Location",
                input: InputKind::Text,
                required: true,
                default: Some("East US"),
            },
            VariableSpec {
                name: "node_count",
                label: "Node Count",
                input: InputKind::Number,
                required: true,
                default: Some("3"),
            },
            VariableSpec {
                name: "vm_size",
                label: "VM Size",
                input: InputKind::Text,
                required: true,
                default: Some("Standard_DS2_v2"),
            },
        ],
        "cosmos-db" => &[
            VariableSpec {
                name: "account_name",
                label: "Account Name",
                input: InputKind::Text,
                required: true,
                default: None,
            },
            VariableSpec {
                name: "location",
                label: "Location",
                input: InputKind::Text,
                required: true,
                default: Some("East US"),
            },
            VariableSpec {
                name: "consistency_level",
                label: "Consistency Level",
                input: InputKind::Text,
                required: true,
                default: Some("Session"),
            },
            VariableSpec {
                name: "throughput",
                label: "Throughput",
                input: InputKind::Number,
                required: true,
                default: Some("400"),
            },
        ],
        _ => &[],
    }
}

/// Credential field schema for a provider, in input order.
pub fn credential_schema_for(provider: Provider) -> &'static [CredentialFieldSpec] {
    match provider {
        Provider::Gcp => &[
            CredentialFieldSpec {
                key: "project_id",
                label: "Project ID",
                input: InputKind::Text,
                required: true,
                secret: false,
                default: None,
            },
            CredentialFieldSpec {
                key: "service_account_key",
                label: "Service Account Key (JSON)",
                input: InputKind::Textarea,
                required: true,
                secret: true,
                default: None,
            },
            CredentialFieldSpec {
                key: "region",
                label: "Default Region",
                input: InputKind::Text,
                required: true,
                secret: false,
                default: Some("us-central1"),
            },
        ],
        Provider::Aws => &[
            CredentialFieldSpec {
                key: "access_key_id",
                label: "Access Key ID",
                input: InputKind::Text,
                required: true,
                secret: true,
                default: None,
            },
            CredentialFieldSpec {
                key: "secret_access_key",
                label: "Secret Access Key",
                input: InputKind::Password,
                required: true,
                secret: true,
                default: None,
            },
            CredentialFieldSpec {
                key: "region",
                label: "Default Region",
                input: InputKind::Text,
                required: true,
                secret: false,
                default: Some("us-east-1"),
            },
            CredentialFieldSpec {
                key: "session_token",
                label: "Session Token (Optional)",
                input: InputKind::Password,
                required: false,
                secret: true,
                default: None,
            },
        ],
        Provider::Azure => &[
            CredentialFieldSpec {
                key: "subscription_id",
                label: "Subscription ID",
                input: InputKind::Text,
                required: true,
                secret: false,
                default: None,
            },
            CredentialFieldSpec {
                key: "client_id",
                label: "Client ID",
                input: InputKind::Text,
                required: true,
                secret: false,
                default: None,
            },
            CredentialFieldSpec {
                key: "client_secret",
                label: "Client Secret",
                input: InputKind::Password,
                required: true,
                secret: true,
                default: None,
            },
            CredentialFieldSpec {
                key: "tenant_id",
                label: "Tenant ID",
                input: InputKind::Text,
                required: true,
                secret: false,
                default: None,
            },
            CredentialFieldSpec {
                key: "location",
                label: "Default Location",
                input: InputKind::Text,
                required: true,
                secret: false,
                default: Some("East US"),
            },
        ],
    }
}
