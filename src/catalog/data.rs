//! Built-in catalog data.
//!
//! The catalog is compiled-in static data; nothing is loaded at runtime.
//! Ordering matters: the first six entries are the "popular" set shown on the
//! overview screen.

use super::entry::{Entry, InstallCommand, Os};

/// One-line bootstrap snippet shown on the overview screen.
pub fn bootstrap_snippet(os: Os) -> &'static str {
    match os {
        Os::Windows => "iwr -useb https://get.lang.dev/install.ps1 | iex",
        Os::Mac | Os::Linux => "curl -fsSL https://get.lang.dev/install.sh | bash",
    }
}

/// The full built-in entry list, in canonical order.
pub fn builtin() -> Vec<Entry> {
    vec![
        Entry {
            id: "javascript".into(),
            name: "JavaScript (Node.js)".into(),
            description: "JavaScript runtime built on Chrome's V8 JavaScript engine".into(),
            category: "Runtime".into(),
            icon: "🟨".into(),
            install_command: InstallCommand {
                windows: "curl -fsSL https://get.lang.dev/nodejs | powershell".into(),
                mac: "curl -fsSL https://get.lang.dev/nodejs | bash".into(),
                linux: "curl -fsSL https://get.lang.dev/nodejs | bash".into(),
            },
            verify_command: "node --version && npm --version".into(),
            additional_steps: vec![
                "Node.js includes npm (Node Package Manager) by default".into(),
                "Consider using nvm for version management".into(),
            ],
            official_docs: "https://nodejs.org/docs".into(),
            prerequisites: vec!["curl or wget".into()],
        },
        Entry {
            id: "python".into(),
            name: "Python".into(),
            description: "High-level programming language for general-purpose programming".into(),
            category: "Language".into(),
            icon: "🐍".into(),
            install_command: InstallCommand {
                windows: "powershell -Command \"& { iwr https://raw.githubusercontent.com/Rohithgg/LangDev/main/scripts/python/install_python.ps1 -UseBasicParsing | iex }\"".into(),
                mac: "curl -fsSL https://raw.githubusercontent.com/Rohithgg/LangDev/main/scripts/python/install_python.sh | bash".into(),
                linux: "curl -fsSL https://raw.githubusercontent.com/Rohithgg/LangDev/main/scripts/python/install_python.sh | bash".into(),
            },
            verify_command: "python --version && pip --version".into(),
            additional_steps: vec![
                "Python includes pip (Package Installer for Python) by default".into(),
                "Virtual environments are recommended for project isolation".into(),
            ],
            official_docs: "https://docs.python.org".into(),
            prerequisites: vec!["curl or wget".into()],
        },
        Entry {
            id: "rust".into(),
            name: "Rust".into(),
            description: "Systems programming language focused on safety, speed, and concurrency"
                .into(),
            category: "Language".into(),
            icon: "🦀".into(),
            install_command: InstallCommand {
                windows: "curl -fsSL https://get.lang.dev/rust | powershell".into(),
                mac: "curl -fsSL https://get.lang.dev/rust | bash".into(),
                linux: "curl -fsSL https://get.lang.dev/rust | bash".into(),
            },
            verify_command: "rustc --version && cargo --version".into(),
            additional_steps: vec![
                "Rust includes Cargo (package manager and build system) by default".into(),
                "Add ~/.cargo/bin to your PATH if not done automatically".into(),
            ],
            official_docs: "https://doc.rust-lang.org".into(),
            prerequisites: vec!["curl or wget".into(), "C++ build tools".into()],
        },
        Entry {
            id: "go".into(),
            name: "Go".into(),
            description: "Open source programming language that makes it easy to build simple, reliable, and efficient software".into(),
            category: "Language".into(),
            icon: "🐹".into(),
            install_command: InstallCommand {
                windows: "curl -fsSL https://get.lang.dev/go | powershell".into(),
                mac: "curl -fsSL https://get.lang.dev/go | bash".into(),
                linux: "curl -fsSL https://get.lang.dev/go | bash".into(),
            },
            verify_command: "go version".into(),
            additional_steps: vec![
                "Set GOPATH environment variable if needed".into(),
                "Go modules are enabled by default in Go 1.16+".into(),
            ],
            official_docs: "https://golang.org/doc".into(),
            prerequisites: vec!["curl or wget".into()],
        },
        Entry {
            id: "java".into(),
            name: "Java".into(),
            description: "Object-oriented programming language and computing platform".into(),
            category: "Language".into(),
            icon: "☕".into(),
            install_command: InstallCommand {
                windows: "curl -fsSL https://get.lang.dev/java | powershell".into(),
                mac: "curl -fsSL https://get.lang.dev/java | bash".into(),
                linux: "curl -fsSL https://get.lang.dev/java | bash".into(),
            },
            verify_command: "java -version && javac -version".into(),
            additional_steps: vec![
                "JAVA_HOME environment variable will be set automatically".into(),
                "Includes OpenJDK by default".into(),
            ],
            official_docs: "https://docs.oracle.com/en/java".into(),
            prerequisites: vec!["curl or wget".into()],
        },
        Entry {
            id: "docker".into(),
            name: "Docker".into(),
            description: "Platform for developing, shipping, and running applications in containers".into(),
            category: "Tool".into(),
            icon: "🐳".into(),
            install_command: InstallCommand {
                windows: "curl -fsSL https://get.lang.dev/docker | powershell".into(),
                mac: "curl -fsSL https://get.lang.dev/docker | bash".into(),
                linux: "curl -fsSL https://get.lang.dev/docker | bash".into(),
            },
            verify_command: "docker --version && docker-compose --version".into(),
            additional_steps: vec![
                "Docker Desktop will be installed on Windows and macOS".into(),
                "Docker daemon will be started automatically".into(),
                "User will be added to docker group on Linux".into(),
            ],
            official_docs: "https://docs.docker.com".into(),
            prerequisites: vec!["curl or wget".into(), "Administrator/sudo privileges".into()],
        },
    ]
}
