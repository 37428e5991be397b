//! Test helpers: small, valid PDFs built in memory

/// Codes shown by `arabic_page`, mapped by the `/ToUnicode` CMap below
const ARABIC_CODES: &str = "AB";

/// `A` -> U+0627 ALEF, `B` -> U+0644 LAM
const ARABIC_CMAP: &str = "/CIDInit /ProcSet findresource begin\n\
12 dict begin\n\
begincmap\n\
/CMapName /Arabic-Test def\n\
/CMapType 2 def\n\
1 begincodespacerange\n<00> <FF>\nendcodespacerange\n\
2 beginbfchar\n<41> <0627>\n<42> <0644>\nendbfchar\n\
endcmap\n\
CMapName currentdict /CMap defineresource pop\n\
end\nend";

enum PageContent {
    Latin(String),
    Arabic,
    Blank,
}

/// Builds a PDF with one text line per page
#[derive(Default)]
pub struct PdfBuilder {
    pages: Vec<PageContent>,
}

impl PdfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page showing `text` (ASCII only, standard 14 font)
    pub fn page(mut self, text: &str) -> Self {
        self.pages.push(PageContent::Latin(text.to_string()));
        self
    }

    /// Add a page whose text extracts as the Arabic "\u{0627}\u{0644}"
    pub fn arabic_page(mut self) -> Self {
        self.pages.push(PageContent::Arabic);
        self
    }

    /// Add a page with an empty content stream
    pub fn blank_page(mut self) -> Self {
        self.pages.push(PageContent::Blank);
        self
    }

    pub fn build(self) -> Vec<u8> {
        // 1: catalog, 2: page tree, 3: Latin font, 4: Arabic font, 5: its
        // ToUnicode CMap, then (page, contents) pairs
        let page_ids: Vec<usize> = (0..self.pages.len()).map(|i| 6 + i * 2).collect();
        let kids = page_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");

        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, self.pages.len()),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /ToUnicode 5 0 R >>".to_string(),
            stream_object(ARABIC_CMAP),
        ];

        for (page, id) in self.pages.iter().zip(&page_ids) {
            let stream = match page {
                PageContent::Latin(text) => {
                    format!("BT /F1 24 Tf 72 720 Td ({}) Tj ET", escape(text))
                }
                PageContent::Arabic => {
                    format!("BT /F2 24 Tf 72 720 Td ({}) Tj ET", ARABIC_CODES)
                }
                PageContent::Blank => String::new(),
            };
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                id + 1
            ));
            objects.push(stream_object(&stream));
        }

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_offset = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_offset
            )
            .as_bytes(),
        );

        out
    }
}

fn stream_object(data: &str) -> String {
    format!("<< /Length {} >>\nstream\n{}\nendstream", data.len(), data)
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}
