//! Container specification shared by every service

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::Transport;

/// Image built from the local application context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub context: String,
    pub dockerfile: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortMapping {
    pub container_port: u16,
    /// Only set under host networking
    pub host_port: Option<u16>,
    pub protocol: Transport,
}

impl PortMapping {
    pub fn container(port: u16) -> Self {
        Self {
            container_port: port,
            host_port: None,
            protocol: Transport::Tcp,
        }
    }

    pub fn host(port: u16) -> Self {
        Self {
            container_port: port,
            host_port: Some(port),
            protocol: Transport::Tcp,
        }
    }
}

/// Per-container memory bounds in MiB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResourceLimits {
    pub memory_reservation_mib: Option<u32>,
    pub memory_limit_mib: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ulimit {
    pub name: &'static str,
    pub soft: u32,
    pub hard: u32,
}

impl Ulimit {
    /// Open-file limit the load-generation runtime requires
    pub const NOFILE: Ulimit = Ulimit {
        name: "nofile",
        soft: 10_000,
        hard: 10_000,
    };
}

/// Host directory exposed to a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostVolume {
    pub name: &'static str,
    pub source_path: &'static str,
}

impl HostVolume {
    pub const DOCKER_SOCKET: HostVolume = HostVolume {
        name: "docker-socket-volume",
        source_path: "/var/run/docker.sock",
    };
    pub const TRAFFIC_CONTROL_STATE: HostVolume = HostVolume {
        name: "docker-tc-volume",
        source_path: "/var/docker-tc",
    };
    pub const SHARED_WORKDIR: HostVolume = HostVolume {
        name: "locust-mount-volume",
        source_path: "/mnt/locust",
    };

    /// Mount this volume at its host path
    pub fn mount(&self) -> MountPoint {
        MountPoint {
            source_volume: self.name,
            container_path: self.source_path,
            read_only: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountPoint {
    pub source_volume: &'static str,
    pub container_path: &'static str,
    pub read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogConfig {
    pub stream_prefix: &'static str,
    pub retention_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerSpec {
    pub name: &'static str,
    pub image: ImageRef,
    pub command: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub ports: Vec<PortMapping>,
    pub limits: ResourceLimits,
    pub ulimits: Vec<Ulimit>,
    pub mounts: Vec<MountPoint>,
    pub logging: LogConfig,
}

impl ContainerSpec {
    pub fn new(name: &'static str, image: ImageRef, logging: LogConfig) -> Self {
        Self {
            name,
            image,
            command: Vec::new(),
            env: BTreeMap::new(),
            ports: Vec::new(),
            limits: ResourceLimits::default(),
            ulimits: Vec::new(),
            mounts: Vec::new(),
            logging,
        }
    }

    pub fn command<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = env;
        self
    }

    pub fn port(mut self, mapping: PortMapping) -> Self {
        self.ports.push(mapping);
        self
    }

    pub fn limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn ulimit(mut self, ulimit: Ulimit) -> Self {
        self.ulimits.push(ulimit);
        self
    }

    pub fn mount(mut self, volume: &HostVolume) -> Self {
        self.mounts.push(volume.mount());
        self
    }

    /// Open-file limit, if one is set
    pub fn file_descriptor_limit(&self) -> Option<Ulimit> {
        self.ulimits.iter().copied().find(|u| u.name == "nofile")
    }

    pub fn mounts_volume(&self, volume: &HostVolume) -> bool {
        self.mounts.iter().any(|m| m.source_volume == volume.name)
    }
}
