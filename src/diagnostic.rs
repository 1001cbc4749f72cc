use camino::Utf8PathBuf;
use codespan_reporting::diagnostic::Severity;
use ecow::EcoString;
use termcolor::Buffer;

/// Byte range into the source text.
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub src: EcoString,
    pub path: Utf8PathBuf,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: Location,
    pub text: String,
}

impl Diagnostic {
    pub fn write(&self, buffer: &mut Buffer) {
        self.write_location(buffer);
    }

    fn write_location(&self, buffer: &mut Buffer) {
        let mut files = codespan_reporting::files::SimpleFiles::new();

        let location_path = self.location.path.as_str();
        let location_src = self.location.src.as_str();

        let file_id = files.add(location_path, location_src);

        let labels = vec![codespan_reporting::diagnostic::Label {
            style: codespan_reporting::diagnostic::LabelStyle::Primary,
            file_id,
            range: (self.location.span.start as usize)..(self.location.span.end as usize),
            message: self.text.clone(),
        }];

        let diagnostic = codespan_reporting::diagnostic::Diagnostic::new(Severity::Error)
            .with_labels(labels)
            .with_message(&self.text);
        let config = codespan_reporting::term::Config::default();

        codespan_reporting::term::emit(buffer, &config, &files, &diagnostic).unwrap();
    }
}
