//! Role Catalog — the static table of canonical roles, their skill gaps and roadmaps.
//!
//! Declaration order matters: the matcher's substring fallback walks this slice
//! front to back and returns the first hit.

/// One canonical job role's expected skill gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    pub canonical_name: &'static str,
    /// Always 8 entries. Order is significant (rendered as a numbered list).
    pub missing_skills: &'static [&'static str],
    /// Six newline-separated phases.
    pub roadmap: &'static str,
}

/// Role returned when nothing else matches.
pub const DEFAULT_ROLE: &str = "full stack developer";

pub static ROLE_PROFILES: &[RoleProfile] = &[
    RoleProfile {
        canonical_name: "full stack developer",
        missing_skills: &[
            "TypeScript Advanced Types",
            "Testing & TDD",
            "CI/CD Pipelines",
            "Containerization (Docker)",
            "Kubernetes Orchestration",
            "GraphQL",
            "Performance Optimization",
            "Security Best Practices",
        ],
        roadmap: "\
Phase 1 (Weeks 1-4): Advanced TypeScript - Master generics, decorators, and type utilities
Phase 2 (Weeks 5-8): Testing - Learn Jest, React Testing Library, Backend testing frameworks
Phase 3 (Weeks 9-12): DevOps Basics - Docker, docker-compose, basic deployment
Phase 4 (Weeks 13-16): CI/CD - GitHub Actions, GitLab CI, or Jenkins
Phase 5 (Weeks 17-20): Advanced Backend - Caching, message queues, microservices
Phase 6 (Weeks 21-24): Performance & Security - Monitoring, security hardening, optimization",
    },
    RoleProfile {
        canonical_name: "web developer",
        missing_skills: &[
            "Responsive Design Frameworks",
            "SEO Optimization",
            "Browser Performance",
            "Web Animations",
            "Progressive Web Apps (PWA)",
            "Cross-browser Compatibility",
            "Web Accessibility Standards",
            "Front-end Build Tools",
        ],
        roadmap: "\
Phase 1 (Weeks 1-3): HTML5 & CSS3 Mastery - Semantic HTML, modern CSS techniques, flexbox, grid
Phase 2 (Weeks 4-6): JavaScript Fundamentals - DOM manipulation, events, AJAX, ES6+ features
Phase 3 (Weeks 7-10): Framework Expertise - React/Vue/Angular deep dive, component patterns
Phase 4 (Weeks 11-14): Performance & Optimization - Lazy loading, code splitting, caching strategies
Phase 5 (Weeks 15-18): Testing & Debugging - Browser dev tools, unit testing, debugging techniques
Phase 6 (Weeks 19-24): Advanced Topics - PWA, WebAssembly basics, deployment optimization",
    },
    RoleProfile {
        canonical_name: "data scientist",
        missing_skills: &[
            "Advanced Statistics",
            "Deep Learning & Neural Networks",
            "Model Deployment",
            "Big Data Technologies (Spark, Hadoop)",
            "MLOps & Model Management",
            "Advanced SQL",
            "Data Visualization",
            "Causal Inference",
        ],
        roadmap: "\
Phase 1 (Weeks 1-3): Statistics Foundation - Hypothesis testing, regression analysis, probability
Phase 2 (Weeks 4-7): Machine Learning - Classification, clustering, ensemble methods
Phase 3 (Weeks 8-11): Deep Learning - Neural networks, CNNs, RNNs, Transformers
Phase 4 (Weeks 12-15): Big Data - Spark, distributed computing, large-scale processing
Phase 5 (Weeks 16-19): MLOps - Model deployment, versioning, monitoring, CI/CD for ML
Phase 6 (Weeks 20-24): Advanced Topics - Causal inference, reinforcement learning, generative models",
    },
    RoleProfile {
        canonical_name: "ai engineer",
        missing_skills: &[
            "Large Language Models (LLM)",
            "Prompt Engineering",
            "Vector Databases",
            "Retrieval-Augmented Generation (RAG)",
            "Model Fine-tuning",
            "Transformer Architecture",
            "Generative AI APIs",
            "Production AI Systems",
        ],
        roadmap: "\
Phase 1 (Weeks 1-4): LLM Fundamentals - Transformer basics, attention mechanisms, token handling
Phase 2 (Weeks 5-8): Prompt Engineering - Few-shot learning, chain-of-thought, advanced prompting
Phase 3 (Weeks 9-12): Generative Models - Text generation, image generation, multimodal models
Phase 4 (Weeks 13-16): Advanced Techniques - Fine-tuning, LoRA, quantization, model optimization
Phase 5 (Weeks 17-20): Production Deployment - API integration, monitoring, scaling AI systems
Phase 6 (Weeks 21-24): Advanced Applications - RAG systems, agent frameworks, real-time inference",
    },
    RoleProfile {
        canonical_name: "frontend developer",
        missing_skills: &[
            "Advanced CSS (Grid, Animations, 3D)",
            "Performance Optimization",
            "Web Accessibility (a11y)",
            "Advanced React Patterns",
            "State Management",
            "Testing",
            "Build Tools Optimization",
            "Web Components",
        ],
        roadmap: "\
Phase 1 (Weeks 1-3): CSS Mastery - Grid layouts, animations, transitions, responsive design
Phase 2 (Weeks 4-6): JavaScript Depth - Closures, prototypes, async patterns, events
Phase 3 (Weeks 7-10): React Advanced - Hooks, Context API, performance optimization, custom hooks
Phase 4 (Weeks 11-13): State Management - Redux, Zustand, or Recoil patterns
Phase 5 (Weeks 14-17): Testing - Unit, integration, and E2E testing strategies
Phase 6 (Weeks 18-24): Performance - Lazy loading, code splitting, monitoring, accessibility (a11y)",
    },
    RoleProfile {
        canonical_name: "backend developer",
        missing_skills: &[
            "System Design",
            "Database Optimization",
            "API Design Patterns",
            "Microservices Architecture",
            "Message Queues",
            "Caching Strategies",
            "Security & Authentication",
            "Scalability Patterns",
        ],
        roadmap: "\
Phase 1 (Weeks 1-4): Database Mastery - Indexing, query optimization, transactions, normalization
Phase 2 (Weeks 5-8): API Design - RESTful principles, GraphQL, versioning, documentation
Phase 3 (Weeks 9-12): System Architecture - Microservices, distributed systems, architectural patterns
Phase 4 (Weeks 13-16): Advanced Patterns - Caching (Redis), message queues (RabbitMQ, Kafka), event-driven
Phase 5 (Weeks 17-20): Security - OAuth, JWT, encryption, SQL injection prevention, rate limiting
Phase 6 (Weeks 21-24): Scalability - Load balancing, database sharding, monitoring, performance tuning",
    },
    RoleProfile {
        canonical_name: "devops engineer",
        missing_skills: &[
            "Kubernetes Advanced",
            "Infrastructure as Code (Terraform, Ansible)",
            "Cloud Platforms (AWS, GCP, Azure)",
            "Monitoring & Logging (Prometheus, ELK)",
            "Disaster Recovery",
            "Security Hardening",
            "GitOps Workflows",
            "Cost Optimization",
        ],
        roadmap: "\
Phase 1 (Weeks 1-4): Docker Deep Dive - Advanced Docker, multi-stage builds, Docker Compose, registries
Phase 2 (Weeks 5-9): Kubernetes - Core concepts, deployments, services, ConfigMaps, StatefulSets
Phase 3 (Weeks 10-14): Infrastructure as Code - Terraform, Ansible, CloudFormation
Phase 4 (Weeks 15-18): Cloud Platforms - Choose AWS/GCP/Azure and master core services
Phase 5 (Weeks 19-22): Observability - Prometheus, Grafana, ELK stack, log aggregation
Phase 6 (Weeks 23-26): Security & Optimization - GitOps, cost optimization, disaster recovery planning",
    },
    RoleProfile {
        canonical_name: "java engineer",
        missing_skills: &[
            "Spring Boot & Spring Framework",
            "JPA/Hibernate ORM",
            "Concurrent Programming & Threading",
            "Design Patterns & SOLID Principles",
            "REST API Development",
            "Microservices Architecture",
            "Maven/Gradle Build Tools",
            "Unit Testing (JUnit, Mockito)",
        ],
        roadmap: "\
Phase 1 (Weeks 1-3): Java Core Mastery - Advanced generics, collections, streams, lambda expressions, functional programming
Phase 2 (Weeks 4-7): Spring Framework - Spring Boot, dependency injection, configuration, annotations, AOP
Phase 3 (Weeks 8-11): Data Access Layer - JPA, Hibernate, Spring Data, query optimization, transaction management
Phase 4 (Weeks 12-15): API Development - REST principles, Spring MVC, request handling, validation, exception handling
Phase 5 (Weeks 16-19): Testing & Quality - JUnit 5, Mockito, integration testing, test-driven development, code coverage
Phase 6 (Weeks 20-24): Microservices & Deployment - Microservices patterns, Docker, Kubernetes, monitoring, production readiness",
    },
    RoleProfile {
        canonical_name: "mobile developer",
        missing_skills: &[
            "Native App Development",
            "Mobile UI/UX Patterns",
            "App Performance Optimization",
            "Offline Data Synchronization",
            "Push Notifications",
            "App Security & Authentication",
            "Testing on Multiple Devices",
            "App Store Deployment",
        ],
        roadmap: "\
Phase 1 (Weeks 1-4): Platform Fundamentals - iOS/Android architecture, lifecycle management, navigation
Phase 2 (Weeks 5-8): UI Development - Layout systems, responsive design, native components, animations
Phase 3 (Weeks 9-12): Backend Integration - API calls, data persistence, local databases, sync strategies
Phase 4 (Weeks 13-16): Performance - Optimization, memory management, battery efficiency, startup time
Phase 5 (Weeks 17-20): Testing - Unit testing, integration testing, device testing, beta distribution
Phase 6 (Weeks 21-24): Advanced Topics - Push notifications, deep linking, monetization, app store optimization",
    },
    RoleProfile {
        canonical_name: "python developer",
        missing_skills: &[
            "Async Programming",
            "Web Frameworks (Django/FastAPI)",
            "Database Design & ORM",
            "Testing Frameworks",
            "Packaging & Distribution",
            "Code Performance Profiling",
            "Security Best Practices",
            "Dependency Management",
        ],
        roadmap: "\
Phase 1 (Weeks 1-3): Python Advanced - Decorators, generators, context managers, metaprogramming
Phase 2 (Weeks 4-7): Web Framework - Django or FastAPI mastery, routing, middleware, templates
Phase 3 (Weeks 8-11): Database & ORM - SQLAlchemy/Django ORM, migrations, query optimization
Phase 4 (Weeks 12-15): Testing & Quality - pytest, unit testing, integration testing, TDD practices
Phase 5 (Weeks 16-19): API Development - REST API design, authentication, documentation, versioning
Phase 6 (Weeks 20-24): Deployment & DevOps - Docker, CI/CD, monitoring, production hardening",
    },
];

/// Looks up a profile by its canonical (lowercase) name.
pub fn lookup(canonical_name: &str) -> Option<&'static RoleProfile> {
    ROLE_PROFILES
        .iter()
        .find(|p| p.canonical_name == canonical_name)
}
