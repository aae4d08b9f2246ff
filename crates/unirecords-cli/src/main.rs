use clap::{Parser, Subcommand};
use dialoguer::{Input, Password, Select};
use dotenvy::dotenv;
use sqlx::PgPool;
use unirecords_cli::accounts::{self, NewAccount, RoleRecord};
use unirecords_cli::seeder::{self, SeedConfig};
use unirecords_models::UserRole;

#[derive(Parser)]
#[command(name = "unirecords-cli")]
#[command(about = "unirecords CLI - administrative tools for the academic records service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create a user together with its student, lecturer or admin record
    CreateUser {
        #[arg(short = 'n', long)]
        name: Option<String>,

        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// STUDENT, LECTURER, DEPARTMENT_ADMIN, SCHOOL_ADMIN or SENATE_ADMIN
        #[arg(short = 'r', long)]
        role: Option<UserRole>,

        /// Matric number (students)
        #[arg(long)]
        matric_number: Option<String>,

        /// Level such as 100 or 200 (students)
        #[arg(long)]
        level: Option<i32>,

        /// Staff id (lecturers)
        #[arg(long)]
        staff_id: Option<String>,

        /// Admin id (admin roles)
        #[arg(long)]
        admin_id: Option<String>,

        /// Department code (students, lecturers, department admins)
        #[arg(long)]
        department: Option<String>,

        /// School code (school admins)
        #[arg(long)]
        school: Option<String>,
    },
    /// Seed the database with fake schools, departments, courses, students and registrations
    Seed {
        /// Number of schools to create (a general studies school is always added)
        #[arg(short = 's', long, default_value = "3")]
        schools: usize,

        /// Departments per school
        #[arg(long, default_value = "4")]
        departments: usize,

        /// Courses per level and semester in every department
        #[arg(long, default_value = "4")]
        courses: usize,

        /// Students per department
        #[arg(long, default_value = "20")]
        students: usize,

        /// Academic year of the generated registrations
        #[arg(long, default_value = unirecords_core::academic_year::DEFAULT_ACADEMIC_YEAR)]
        academic_year: String,
    },
    /// Clear seeded academic data and all student and lecturer accounts
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match unirecords_db::init_db_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::CreateUser {
            name,
            email,
            password,
            role,
            matric_number,
            level,
            staff_id,
            admin_id,
            department,
            school,
        } => {
            handle_create_user(
                &pool,
                CreateUserArgs {
                    name,
                    email,
                    password,
                    role,
                    matric_number,
                    level,
                    staff_id,
                    admin_id,
                    department,
                    school,
                },
            )
            .await
        }
        Commands::Seed {
            schools,
            departments,
            courses,
            students,
            academic_year,
        } => {
            let config = SeedConfig {
                num_schools: schools,
                departments_per_school: departments,
                courses_per_semester: courses,
                students_per_department: students,
                academic_year,
                ..Default::default()
            };
            seeder::seed_all(&pool, config).await
        }
        Commands::ClearSeed => seeder::clear_all(&pool).await,
    };

    if let Err(e) = result {
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    unirecords_db::run_migrations(pool).await?;
    println!("✅ Migrations applied");
    Ok(())
}

struct CreateUserArgs {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    role: Option<UserRole>,
    matric_number: Option<String>,
    level: Option<i32>,
    staff_id: Option<String>,
    admin_id: Option<String>,
    department: Option<String>,
    school: Option<String>,
}

fn prompt_text(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

fn prompt_optional(value: Option<String>, prompt: &str) -> anyhow::Result<Option<String>> {
    if value.is_some() {
        return Ok(value);
    }
    let raw: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(Some(raw.trim().to_string()).filter(|s| !s.is_empty()))
}

async fn handle_create_user(pool: &PgPool, args: CreateUserArgs) -> anyhow::Result<()> {
    let name = prompt_text(args.name, "Full name")?;
    let email = prompt_text(args.email, "Email address")?;

    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let role = match args.role {
        Some(role) => role,
        None => {
            let choice = Select::new()
                .with_prompt("Role")
                .items(&UserRole::ALL.map(|r| r.as_str()))
                .default(0)
                .interact()?;
            UserRole::ALL[choice]
        }
    };

    let record = match role {
        UserRole::Student => RoleRecord::Student {
            matric_number: prompt_text(args.matric_number, "Matric number")?,
            level: match args.level {
                Some(level) => level,
                None => Input::new().with_prompt("Level").interact_text()?,
            },
            department_code: prompt_text(args.department, "Department code")?,
        },
        UserRole::Lecturer => RoleRecord::Lecturer {
            staff_id: prompt_text(args.staff_id, "Staff ID")?,
            department_code: prompt_text(args.department, "Department code")?,
        },
        UserRole::DepartmentAdmin => RoleRecord::Admin {
            admin_id: prompt_text(args.admin_id, "Admin ID")?,
            department_code: Some(prompt_text(args.department, "Department code")?),
            school_code: args.school,
        },
        UserRole::SchoolAdmin => RoleRecord::Admin {
            admin_id: prompt_text(args.admin_id, "Admin ID")?,
            department_code: args.department,
            school_code: prompt_optional(args.school, "School code (optional)")?,
        },
        UserRole::SenateAdmin => RoleRecord::Admin {
            admin_id: prompt_text(args.admin_id, "Admin ID")?,
            department_code: args.department,
            school_code: args.school,
        },
    };

    let account = NewAccount {
        name,
        email,
        password,
        role,
        record,
    };
    let user_id = accounts::create_account(pool, &account).await?;

    println!("\n✅ User created successfully!");
    println!("   ID: {}", user_id);
    println!("   Email: {}", account.email);
    println!("   Role: {}", account.role);

    Ok(())
}
