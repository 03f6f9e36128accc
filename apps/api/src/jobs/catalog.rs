//! Built-in job catalog served when the external search provider is unavailable.
//!
//! The catalog is constructed once at startup and shared read-only as `Arc<Catalog>`.
//! Entries never change for the lifetime of the process.

use crate::jobs::models::JobPosting;

/// Location shown for catalog entries without a fixed location when the
/// query does not supply one either.
pub const DEFAULT_LOCATION: &str = "Remote";

/// One catalog entry. `location = None` means "wherever the searcher is looking".
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogJob {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: String,
    pub url: String,
    pub source: String,
    pub posted_date: Option<String>,
    pub salary: Option<String>,
}

impl CatalogJob {
    /// Materializes the entry for a response, substituting the display location.
    pub fn to_posting(&self, requested_location: Option<&str>) -> JobPosting {
        let location = self
            .location
            .as_deref()
            .or(requested_location)
            .unwrap_or(DEFAULT_LOCATION)
            .to_string();

        JobPosting {
            id: JobPosting::id_for_url(&self.url),
            title: self.title.clone(),
            company: self.company.clone(),
            location,
            description: self.description.clone(),
            url: self.url.clone(),
            source: self.source.clone(),
            posted_date: self.posted_date.clone(),
            salary: self.salary.clone(),
        }
    }
}

/// Immutable, ordered collection of catalog entries. Order is significant:
/// it breaks ties in every ranking.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    jobs: Vec<CatalogJob>,
}

impl Catalog {
    pub fn new(jobs: Vec<CatalogJob>) -> Self {
        Self { jobs }
    }

    /// The sample postings shipped with the service.
    pub fn builtin() -> Self {
        Self::new(SEED.iter().map(SeedJob::to_catalog_job).collect())
    }

    pub fn jobs(&self) -> &[CatalogJob] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

struct SeedJob {
    title: &'static str,
    company: &'static str,
    location: Option<&'static str>,
    description: &'static str,
    url: &'static str,
    source: &'static str,
    posted_date: Option<&'static str>,
    salary: Option<&'static str>,
}

impl SeedJob {
    fn to_catalog_job(&self) -> CatalogJob {
        CatalogJob {
            title: self.title.to_string(),
            company: self.company.to_string(),
            location: self.location.map(String::from),
            description: self.description.to_string(),
            url: self.url.to_string(),
            source: self.source.to_string(),
            posted_date: self.posted_date.map(String::from),
            salary: self.salary.map(String::from),
        }
    }
}

const SEED: &[SeedJob] = &[
    SeedJob {
        title: "Senior Software Engineer",
        company: "Tech Corp",
        location: None,
        description: "We are looking for a senior developer with Python and React experience. Own services end to end in a small, fast-moving team.",
        url: "https://example.com/jobs/tech-corp-senior-software-engineer",
        source: "LinkedIn",
        posted_date: Some("2 days ago"),
        salary: Some("$140k - $180k"),
    },
    SeedJob {
        title: "Product Manager",
        company: "Innovation Labs",
        location: Some("New York, NY"),
        description: "Lead our product team to build the next generation of AI tools. Work closely with design and engineering on roadmap and discovery.",
        url: "https://example.com/jobs/innovation-labs-product-manager",
        source: "Glassdoor",
        posted_date: Some("1 week ago"),
        salary: Some("$130,000 - $160,000"),
    },
    SeedJob {
        title: "Data Scientist",
        company: "Data AI",
        location: Some("San Francisco, CA"),
        description: "Analyze large datasets and build predictive models. PyTorch and SQL experience required.",
        url: "https://example.com/jobs/data-ai-data-scientist",
        source: "Indeed",
        posted_date: Some("3 days ago"),
        salary: Some("$125k - $155k"),
    },
    SeedJob {
        title: "Frontend Developer",
        company: "Startup Inc",
        location: Some("Bangalore"),
        description: "Looking for a frontend developer with React skills. Position open for freshers and experienced engineers.",
        url: "https://example.com/jobs/startup-inc-frontend-developer",
        source: "Naukri",
        posted_date: Some("5 hours ago"),
        salary: Some("₹8,00,000 - ₹14,00,000"),
    },
    SeedJob {
        title: "Full Stack Developer",
        company: "WebTech Solutions",
        location: Some("Austin, TX"),
        description: "Build modern web applications using the MERN stack, from database schema to frontend components.",
        url: "https://example.com/jobs/webtech-full-stack-developer",
        source: "LinkedIn",
        posted_date: Some("1 day ago"),
        salary: Some("$100k - $130k"),
    },
    SeedJob {
        title: "DevOps Engineer",
        company: "Cloud Systems",
        location: Some("Seattle, WA"),
        description: "Manage cloud infrastructure and CI/CD pipelines. AWS and Terraform experience preferred.",
        url: "https://example.com/jobs/cloud-systems-devops-engineer",
        source: "Indeed",
        posted_date: Some("2 weeks ago"),
        salary: Some("$115,000 - $145,000"),
    },
    SeedJob {
        title: "Machine Learning Engineer",
        company: "AI Innovations",
        location: Some("Boston, MA"),
        description: "Develop ML models and deploy them to production with TensorFlow and Kubernetes.",
        url: "https://example.com/jobs/ai-innovations-ml-engineer",
        source: "Glassdoor",
        posted_date: Some("4 days ago"),
        salary: Some("$150k - $190k"),
    },
    SeedJob {
        title: "UI/UX Designer",
        company: "Design Studio",
        location: Some("Los Angeles, CA"),
        description: "Create beautiful and intuitive user interfaces. Figma fluency and a strong portfolio expected.",
        url: "https://example.com/jobs/design-studio-ui-ux-designer",
        source: "LinkedIn",
        posted_date: Some("3 weeks ago"),
        salary: Some("$90k - $115k"),
    },
    SeedJob {
        title: "Backend Developer",
        company: "Payments Hub",
        location: Some("Pune"),
        description: "Design REST APIs in Python and PostgreSQL. You will pair with our frontend developer team on contract design.",
        url: "https://example.com/jobs/payments-hub-backend-developer",
        source: "Naukri",
        posted_date: Some("1 hour ago"),
        salary: Some("₹12,00,000 - ₹20,00,000"),
    },
    SeedJob {
        title: "Junior Frontend Engineer",
        company: "Pixel Forge",
        location: None,
        description: "Entry level role building accessible React and TypeScript interfaces. Mentorship provided for freshers.",
        url: "https://example.com/jobs/pixel-forge-junior-frontend-engineer",
        source: "Wellfound",
        posted_date: Some("2 days ago"),
        salary: Some("$70k - $85k"),
    },
    SeedJob {
        title: "Site Reliability Engineer",
        company: "Uptime Co",
        location: None,
        description: "Keep our distributed systems fast and available. On-call rotation, Linux and Go experience.",
        url: "https://example.com/jobs/uptime-co-sre",
        source: "LinkedIn",
        posted_date: Some("6 days ago"),
        salary: Some("$135k - $165k"),
    },
    SeedJob {
        title: "Data Analyst Intern",
        company: "Retail Insights",
        location: Some("Hyderabad"),
        description: "Internship for students and freshers. Build dashboards in SQL and Excel for the merchandising team.",
        url: "https://example.com/jobs/retail-insights-data-analyst-intern",
        source: "Internshala",
        posted_date: Some("Just posted"),
        salary: Some("₹25,000 - ₹30,000"),
    },
    SeedJob {
        title: "Android Developer",
        company: "Appsmith Mobile",
        location: Some("Chennai"),
        description: "Ship Kotlin and Jetpack Compose features to millions of users. Mid-level role.",
        url: "https://example.com/jobs/appsmith-android-developer",
        source: "Naukri",
        posted_date: Some("2 days ago"),
        salary: Some("₹10,00,000 - ₹16,00,000"),
    },
    SeedJob {
        title: "iOS Developer",
        company: "Swift Labs",
        location: Some("London"),
        description: "Build SwiftUI apps for a consumer fintech product. Senior iOS engineers encouraged to apply.",
        url: "https://example.com/jobs/swift-labs-ios-developer",
        source: "Glassdoor",
        posted_date: Some("1 week ago"),
        salary: Some("£65,000 - £85,000"),
    },
    SeedJob {
        title: "Cloud Architect",
        company: "Nimbus Consulting",
        location: None,
        description: "Senior role designing multi-region AWS and Azure platforms for enterprise clients.",
        url: "https://example.com/jobs/nimbus-cloud-architect",
        source: "Indeed",
        posted_date: Some("3 days ago"),
        salary: Some("$170k - $210k"),
    },
    SeedJob {
        title: "QA Automation Engineer",
        company: "TestRight",
        location: Some("Noida"),
        description: "Write Selenium and Playwright suites for web and mobile releases. Associate level.",
        url: "https://example.com/jobs/testright-qa-automation-engineer",
        source: "Naukri",
        posted_date: Some("1 day ago"),
        salary: Some("₹6,00,000 - ₹9,00,000"),
    },
    SeedJob {
        title: "Engineering Manager",
        company: "ScaleUp",
        location: Some("Toronto"),
        description: "Lead a team of eight engineers shipping our core platform. Prior people management experience required.",
        url: "https://example.com/jobs/scaleup-engineering-manager",
        source: "LinkedIn",
        posted_date: Some("2 weeks ago"),
        salary: Some("$180k - $220k"),
    },
    SeedJob {
        title: "Data Engineer",
        company: "StreamWorks",
        location: None,
        description: "Build batch and streaming pipelines with Spark, Kafka and Airflow. Mid-senior level.",
        url: "https://example.com/jobs/streamworks-data-engineer",
        source: "Wellfound",
        posted_date: Some("8 hours ago"),
        salary: Some("$120k - $150k"),
    },
    SeedJob {
        title: "Technical Writer",
        company: "DocuSoft",
        location: Some("Remote"),
        description: "Write developer documentation, API references and tutorials for our SDKs.",
        url: "https://example.com/jobs/docusoft-technical-writer",
        source: "Indeed",
        posted_date: None,
        salary: Some("Competitive"),
    },
    SeedJob {
        title: "Security Engineer",
        company: "ShieldNet",
        location: Some("Washington, DC"),
        description: "Threat modeling, penetration testing and cloud security reviews. Clearance preferred.",
        url: "https://example.com/jobs/shieldnet-security-engineer",
        source: "Glassdoor",
        posted_date: Some("5 days ago"),
        salary: Some("$145,000 - $175,000"),
    },
    SeedJob {
        title: "Rust Systems Engineer",
        company: "Ferrous Systems Co",
        location: Some("Berlin"),
        description: "Work on a high-performance storage engine in Rust. Systems programming and concurrency experience.",
        url: "https://example.com/jobs/ferrous-rust-systems-engineer",
        source: "Wellfound",
        posted_date: Some("3 hours ago"),
        salary: Some("€85,000 - €110,000"),
    },
    SeedJob {
        title: "Graduate Software Engineer",
        company: "Global Bank",
        location: Some("Mumbai"),
        description: "Graduate programme for freshers in software engineering. Java and Spring Boot training included.",
        url: "https://example.com/jobs/global-bank-graduate-software-engineer",
        source: "Naukri",
        posted_date: Some("1 week ago"),
        salary: Some("₹7,00,000 - ₹9,00,000"),
    },
    SeedJob {
        title: "Business Analyst",
        company: "Consulting Partners",
        location: Some("Gurgaon"),
        description: "Gather requirements and translate business needs into product specifications.",
        url: "https://example.com/jobs/consulting-partners-business-analyst",
        source: "Indeed",
        posted_date: Some("2 days ago"),
        salary: None,
    },
    SeedJob {
        title: "React Native Developer",
        company: "Wellness Apps",
        location: None,
        description: "Cross-platform mobile developer building wellness features with React Native and TypeScript.",
        url: "https://example.com/jobs/wellness-apps-react-native-developer",
        source: "LinkedIn",
        posted_date: Some("12 hours ago"),
        salary: Some("$95k - $120k"),
    },
    SeedJob {
        title: "AI Research Scientist",
        company: "DeepThought Labs",
        location: Some("San Francisco, CA"),
        description: "Research large language models and publish at top venues. PhD in machine learning preferred.",
        url: "https://example.com/jobs/deepthought-ai-research-scientist",
        source: "Glassdoor",
        posted_date: Some("4 weeks ago"),
        salary: Some("$200k - $260k"),
    },
    SeedJob {
        title: "Platform Engineer",
        company: "Cloud Systems",
        location: Some("Denver, CO"),
        description: "Build internal developer platforms on Kubernetes. Experienced engineers with Go or Rust.",
        url: "https://example.com/jobs/cloud-systems-platform-engineer",
        source: "LinkedIn",
        posted_date: Some("3 days ago"),
        salary: Some("$130k - $160k"),
    },
    SeedJob {
        title: "Customer Success Manager",
        company: "SaaSly",
        location: Some("Singapore"),
        description: "Own onboarding and renewals for mid-market accounts.",
        url: "https://example.com/jobs/saasly-customer-success-manager",
        source: "Wellfound",
        posted_date: Some("1 day ago"),
        salary: Some("S$80,000 - S$100,000"),
    },
    SeedJob {
        title: "Embedded Software Engineer",
        company: "Circuit Works",
        location: Some("Bangalore"),
        description: "Firmware in C and Rust for industrial IoT devices. Associate and mid-level openings.",
        url: "https://example.com/jobs/circuit-works-embedded-software-engineer",
        source: "Naukri",
        posted_date: Some("6 hours ago"),
        salary: Some("₹9,00,000 - ₹15,00,000"),
    },
];
