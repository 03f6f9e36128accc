//! Static autocomplete vocabularies.

pub const JOB_TITLES: &[&str] = &[
    "Software Engineer", "Senior Software Engineer", "Staff Software Engineer",
    "Frontend Developer", "Backend Developer", "Full Stack Developer",
    "Data Scientist", "Data Analyst", "Data Engineer",
    "Product Manager", "Senior Product Manager", "Product Owner",
    "DevOps Engineer", "Site Reliability Engineer", "Cloud Engineer",
    "UI/UX Designer", "Product Designer", "Graphic Designer",
    "Mobile Developer", "iOS Developer", "Android Developer",
    "Machine Learning Engineer", "AI Engineer", "Research Scientist",
    "QA Engineer", "Test Engineer", "Automation Engineer",
    "Business Analyst", "Systems Analyst", "Technical Analyst",
    "Project Manager", "Scrum Master", "Agile Coach",
    "Tech Lead", "Engineering Manager", "Director of Engineering",
    "CTO", "VP of Engineering", "Head of Engineering",
];

pub const LOCATIONS: &[&str] = &[
    // India, cities
    "Bangalore", "Mumbai", "Delhi", "Hyderabad", "Pune", "Chennai", "Kolkata",
    "Gurgaon", "Noida", "Ahmedabad", "Jaipur", "Chandigarh", "Kochi", "Indore",
    // India, states
    "Karnataka", "Maharashtra", "Delhi NCR", "Telangana", "Tamil Nadu",
    "Gujarat", "Rajasthan", "Kerala", "West Bengal", "Punjab",
    // USA, cities
    "San Francisco", "New York", "Seattle", "Austin", "Boston",
    "Los Angeles", "Chicago", "Denver", "Portland", "Atlanta",
    // USA, states
    "California", "Texas", "Washington", "Massachusetts",
    "Colorado", "Oregon", "Georgia", "Florida", "Illinois",
    "London", "Singapore", "Dubai", "Toronto", "Sydney",
    "Berlin", "Amsterdam", "Paris", "Tokyo", "Hong Kong",
    "Remote", "Work from Home", "Hybrid",
];

pub const SKILLS: &[&str] = &[
    "Python", "JavaScript", "TypeScript", "Java", "C++", "C#", "Go", "Rust",
    "Ruby", "PHP", "Swift", "Kotlin", "Dart", "Scala", "R",
    "React", "Angular", "Vue.js", "Next.js", "Svelte", "HTML", "CSS",
    "Tailwind CSS", "Bootstrap", "Material-UI", "Redux", "MobX",
    "Node.js", "Express.js", "FastAPI", "Django", "Flask", "Spring Boot",
    "ASP.NET", "Ruby on Rails", "Laravel", "NestJS",
    "PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch",
    "DynamoDB", "Cassandra", "Oracle", "SQL Server", "SQLite",
    "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Jenkins",
    "GitLab CI", "GitHub Actions", "Terraform", "Ansible", "CircleCI",
    "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Pandas",
    "NumPy", "Scikit-learn", "Keras", "NLP", "Computer Vision",
    "React Native", "Flutter", "iOS Development", "Android Development",
    "SwiftUI", "Jetpack Compose",
    "Git", "Linux", "Agile", "Scrum", "JIRA", "Figma", "Adobe XD",
    "REST API", "GraphQL", "Microservices", "System Design", "Testing",
];

pub const UNIVERSITIES: &[&str] = &[
    "IIT Bombay", "IIT Delhi", "IIT Madras", "IIT Kanpur", "IIT Kharagpur",
    "IIT Roorkee", "IIT Guwahati", "IIT Hyderabad", "IIT Bangalore",
    "NIT Trichy", "NIT Warangal", "NIT Surathkal", "NIT Calicut",
    "BITS Pilani", "IIIT Hyderabad", "Delhi University", "Mumbai University",
    "Anna University", "VIT Vellore", "Manipal Institute of Technology",
    "SRM University", "Amity University", "Lovely Professional University",
    "Harvard University", "MIT", "Stanford University", "Yale University",
    "Princeton University", "Columbia University", "Cornell University",
    "University of Pennsylvania", "Brown University", "Dartmouth College",
    "Carnegie Mellon University", "UC Berkeley", "Georgia Tech",
    "University of Illinois", "University of Michigan", "UT Austin",
    "University of Washington", "Caltech", "UCLA", "USC",
    "Oxford University", "Cambridge University", "Imperial College London",
    "UCL", "University of Edinburgh", "King's College London",
    "National University of Singapore", "Nanyang Technological University",
    "University of Toronto", "University of British Columbia",
    "ETH Zurich", "Technical University of Munich", "University of Tokyo",
];

pub const COMPANIES: &[&str] = &[
    "Google", "Facebook", "Meta", "Amazon", "Apple", "Netflix", "Microsoft",
    "IBM", "Oracle", "SAP", "Adobe", "Salesforce", "Intel", "NVIDIA",
    "Cisco", "VMware", "Dell", "HP", "Qualcomm",
    "TCS", "Infosys", "Wipro", "HCL", "Tech Mahindra", "Cognizant",
    "Capgemini", "Accenture", "LTI", "Mindtree", "Mphasis",
    "Uber", "Airbnb", "Stripe", "Spotify", "Slack", "Zoom", "Dropbox",
    "Atlassian", "Shopify", "Square", "PayPal", "Twitter", "LinkedIn",
    "Flipkart", "Paytm", "Ola", "Swiggy", "Zomato", "PhonePe",
    "CRED", "Razorpay", "Freshworks", "Zoho", "InMobi", "Byju's",
    "McKinsey", "BCG", "Bain", "Deloitte", "PwC", "EY", "KPMG",
    "Goldman Sachs", "Morgan Stanley", "JP Morgan", "Citibank",
    "HSBC", "Barclays", "Deutsche Bank",
];

pub const DEGREES: &[&str] = &[
    "Bachelor's", "B.Tech", "B.E.", "B.Sc", "BCA", "B.Com", "BBA",
    "Master's", "M.Tech", "M.E.", "M.Sc", "MCA", "MBA", "M.Com",
    "PhD", "Doctorate",
    "Diploma", "Associate Degree",
    "High School", "12th Grade", "10th Grade",
];

pub const FIELDS_OF_STUDY: &[&str] = &[
    "Computer Science", "Information Technology", "Software Engineering",
    "Computer Engineering", "Electrical Engineering", "Electronics Engineering",
    "Mechanical Engineering", "Civil Engineering", "Chemical Engineering",
    "Data Science", "Artificial Intelligence", "Machine Learning",
    "Business Administration", "Management", "Finance", "Accounting",
    "Marketing", "Economics", "Mathematics", "Statistics", "Physics",
    "Chemistry", "Biology", "Biotechnology", "Psychology", "Sociology",
    "English", "Communications", "Journalism", "Design", "Architecture",
];

/// Role name → skills expected for it.
pub const SKILL_KNOWLEDGE_BASE: &[(&str, &[&str])] = &[
    (
        "Frontend Developer",
        &["React", "TypeScript", "Tailwind CSS", "Next.js", "Redux", "Web Performance"],
    ),
    (
        "Backend Developer",
        &["Python", "FastAPI", "PostgreSQL", "Docker", "Redis", "System Design"],
    ),
    (
        "Full Stack Developer",
        &["React", "Node.js", "Python", "Database Design", "DevOps", "GraphQL"],
    ),
    (
        "Data Scientist",
        &["Python", "Pandas", "Machine Learning", "SQL", "TensorFlow", "Statistics"],
    ),
    (
        "DevOps Engineer",
        &["Docker", "Kubernetes", "AWS", "CI/CD", "Terraform", "Linux"],
    ),
    (
        "Product Manager",
        &["Agile", "User Research", "Roadmapping", "Data Analysis", "Communication"],
    ),
    (
        "Mobile Developer",
        &["React Native", "Flutter", "iOS", "Android", "Dart"],
    ),
];
