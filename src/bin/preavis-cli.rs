#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use preavis::{
    calculator::Calculator,
    config::{self, HolidaySettings, SmtpSettings},
    export::{export_summary, DocumentFormat},
    form::{self, FormInput},
    holidays::{CalendarificProvider, HolidayProvider, NoHolidays},
    mail::{Mailer, SmtpMailer},
    model::{CompanyRule, Country},
    summary::{confirmation_message, Summary},
    weekend::weekend_days,
};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de calcul du dernier jour travaillé
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculer le dernier jour travaillé
    Calculate {
        /// Date de démission YYYY-MM-DD (défaut : aujourd'hui)
        #[arg(long, value_parser = parse_date_arg)]
        resignation_date: Option<NaiveDate>,
        /// Préavis en jours (>= 1)
        #[arg(long, default_value_t = form::DEFAULT_NOTICE_PERIOD_DAYS, value_parser = clap::value_parser!(u32).range(1..))]
        notice_period: u32,
        #[arg(long, value_enum, default_value_t = Country::India)]
        country: Country,
        /// Code ISO prioritaire sur --country (ex. "FR")
        #[arg(long)]
        country_code: Option<String>,
        /// Jours fériés personnalisés "YYYY-MM-DD,YYYY-MM-DD"
        #[arg(long)]
        holidays: Option<String>,
        #[arg(long, value_enum, default_value_t = CompanyRule::IncludeWeekends)]
        rule: CompanyRule,
        /// Envoyer le récapitulatif à cette adresse
        #[arg(long)]
        email: Option<String>,
        /// Exporter le récapitulatif dans ce fichier
        #[arg(long)]
        export: Option<PathBuf>,
        /// Format du document (défaut : déduit de l'extension)
        #[arg(long, value_enum)]
        format: Option<DocumentFormat>,
        /// Ne pas interroger le fournisseur de jours fériés
        #[arg(long)]
        offline: bool,
    },

    /// Lister les pays du formulaire
    Countries,
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    form::parse_date(raw).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    dotenv::dotenv().ok();
    // chaque section échoue seule : un port SMTP invalide ne coupe que le mail
    let holiday_settings: HolidaySettings = config::from_env("holiday provider").unwrap_or_else(|err| {
        eprintln!("Warning: {err:#}; using default holiday provider settings");
        HolidaySettings::default()
    });
    let smtp_settings: Result<SmtpSettings> = config::from_env("SMTP");

    let code = match cli.cmd {
        Commands::Calculate {
            resignation_date,
            notice_period,
            country,
            country_code,
            holidays,
            rule,
            email,
            export,
            format,
            offline,
        } => {
            let input = FormInput {
                resignation_date: resignation_date.unwrap_or_else(|| Local::now().date_naive()),
                notice_period_days: notice_period,
                country,
                country_code_override: country_code,
                custom_holidays: holidays,
                rule,
                email,
            };
            let form = form::validate(input)?;
            for msg in &form.messages {
                eprintln!("Warning: {msg}");
            }

            let provider: Box<dyn HolidayProvider> = if offline {
                Box::new(NoHolidays)
            } else {
                Box::new(
                    CalendarificProvider::new(holiday_settings.api_key.clone())
                        .with_base_url(holiday_settings.holiday_api_url.clone()),
                )
            };

            let calculation = Calculator::new(provider).compute(&form.request);
            for w in &calculation.warnings {
                eprintln!("Warning: {w}");
            }
            println!("{}", confirmation_message(calculation.last_working_day));

            let summary = Summary::new(form.country_label.as_str(), &form.request, &calculation);
            let mut code = 0;

            if let Some(path) = &export {
                let fmt = format.unwrap_or_else(|| DocumentFormat::from_path(path));
                match export_summary(path, &summary, fmt) {
                    Ok(()) => println!("Summary written to {}", path.display()),
                    Err(err) => {
                        eprintln!("Error: could not export summary: {err:#}");
                        code = 2;
                    }
                }
            }

            if let Some(to) = &form.email {
                let fmt = format
                    .or_else(|| export.as_ref().map(DocumentFormat::from_path))
                    .unwrap_or_default();
                match smtp_settings.as_ref().map(SmtpSettings::mail) {
                    Err(err) => {
                        eprintln!("Error: could not email summary: {err:#}");
                        code = 2;
                    }
                    Ok(None) => {
                        eprintln!("Error: email delivery is not configured (PREAVIS_SMTP_HOST, PREAVIS_MAIL_FROM)");
                        code = 2;
                    }
                    Ok(Some(mail)) => match SmtpMailer::new(&mail).and_then(|m| m.deliver(to, &summary, fmt)) {
                        Ok(()) => println!("Summary emailed to {to}"),
                        Err(err) => {
                            eprintln!("Error: could not email summary: {err}");
                            code = 2;
                        }
                    },
                }
            }
            // Code 2 = résultat calculé mais export/envoi incomplet
            code
        }
        Commands::Countries => {
            for country in Country::ALL {
                let weekend = weekend_days(country.display_name())
                    .weekdays()
                    .iter()
                    .map(|d| d.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{} | {} | {}", country, country.iso_code(), weekend);
            }
            0
        }
    };

    std::process::exit(code);
}
