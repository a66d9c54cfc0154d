use log::info;

use crate::job::descriptor::JobDescriptor;
use crate::job::placeholder::Placeholder;
use crate::template::read::Template;

/// A template with every recognised placeholder replaced, one line per template line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedScript {
    lines: Vec<String>,
}

impl RenderedScript {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Complete script text, exactly as it will be written to disk
    pub fn contents(&self) -> String {
        self.lines.concat()
    }
}

/// Render a template for a job
///
/// Each line is scanned once. Substituted values are never scanned again, so a queue name that
/// happens to contain `&ppn` stays literal no matter which placeholder was replaced first.
pub fn render(template: &Template, job: &JobDescriptor) -> RenderedScript {
    let lines: Vec<String> = template.lines()
        .iter()
        .map(|line| render_line(line, job))
        .collect();

    info!("Rendered {} template line(s) for job {}", lines.len(), job.job_name());
    RenderedScript { lines }
}

fn render_line(line: &str, job: &JobDescriptor) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(i) = rest.find(Placeholder::SIGIL) {
        out.push_str(&rest[..i]);
        rest = &rest[i..];
        match Placeholder::match_prefix(rest) {
            Some(placeholder) => {
                out.push_str(&job.value(placeholder));
                rest = &rest[placeholder.token().len()..];
            }
            None => {
                out.push(Placeholder::SIGIL);
                rest = &rest[Placeholder::SIGIL.len_utf8()..];
            }
        }
    }
    out.push_str(rest);

    out
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::preset::Preset;

    static SAMPLE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/templates/pbs_template.txt"));

    fn job(queue: &str) -> JobDescriptor {
        JobDescriptor::new("analyze.py", Path::new("/jobs/x"), queue, 2, 4, Preset::Standard.naming())
            .unwrap()
    }

    #[test]
    fn renders_pbs_header() {
        let template = Template::from_text("#PBS -N &job_name\n#PBS -q &queue_name\n#PBS -l nodes=&n_nodes:ppn=&ppn\n");
        let script = render(&template, &job("gpu"));
        assert_eq!(script.lines(), [
            "#PBS -N analyze\n",
            "#PBS -q gpu\n",
            "#PBS -l nodes=2:ppn=4\n",
        ]);
    }

    #[test]
    fn no_tokens_left_after_rendering() {
        let script = render(&Template::from_text(SAMPLE), &job("gpu"));
        let contents = script.contents();
        for placeholder in Placeholder::ALL {
            assert!(SAMPLE.contains(placeholder.token()), "sample lacks {}", placeholder.token());
            assert!(!contents.contains(placeholder.token()), "{} left in script", placeholder.token());
        }
        assert!(contents.contains("python /jobs/x/analyze.py\n"));
        assert!(contents.contains("#PBS -e analyze.err\n"));
        assert!(contents.contains("#PBS -o analyze.out\n"));
    }

    #[test]
    fn template_without_tokens_is_unchanged() {
        let text = "#!/bin/bash\n# a & b && c\necho $HOME &\n\nno newline at end";
        let script = render(&Template::from_text(text), &job("gpu"));
        assert_eq!(script.contents(), text);
        assert_eq!(script.lines().len(), 5);
    }

    #[test]
    fn rendering_is_deterministic() {
        let template = Template::from_text(SAMPLE);
        let first = render(&template, &job("gpu")).contents();
        let second = render(&template, &job("gpu")).contents();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn unknown_placeholders_pass_through() {
        let template = Template::from_text("&job_name &walltime &&ppn &\n");
        let script = render(&template, &job("gpu"));
        assert_eq!(script.contents(), "analyze &walltime &4 &\n");
    }

    #[test]
    fn values_are_not_substituted_again() {
        let template = Template::from_text("-q &queue_name -l ppn=&ppn\n");
        let script = render(&template, &job("&ppn"));
        assert_eq!(script.contents(), "-q &ppn -l ppn=4\n");
    }

    #[test]
    fn repeated_tokens_on_one_line() {
        let template = Template::from_text("&job_name-&job_name.&job_outfile_name\n");
        let script = render(&template, &job("gpu"));
        assert_eq!(script.contents(), "analyze-analyze.analyze.out\n");
    }
}
