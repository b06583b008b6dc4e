use site_kickstarter::error::Error;
use site_kickstarter::resources::{resolve, GeneratorVariant, TemplateBundle};
use tempfile::TempDir;

#[test]
fn test_embedded_templates() {
    let bundle = TemplateBundle::Embedded;

    let sites = bundle.load(&resolve(GeneratorVariant::Fluid, "Content/Sites.xml")).unwrap();
    assert!(sites.contains("{% for dimension in dimensions %}"));

    let page = bundle.load(&resolve(GeneratorVariant::Afx, "Fusion/Document/AbstractPage.fusion")).unwrap();
    assert!(page.contains("prototype({packageKey}:Document.AbstractPage)"));
}

#[test]
fn test_variants_are_separate_namespaces() {
    let bundle = TemplateBundle::Embedded;

    assert!(bundle.load(&resolve(GeneratorVariant::Fluid, "Template/SiteTemplate.html")).is_ok());
    assert!(matches!(
        bundle.load(&resolve(GeneratorVariant::Afx, "Template/SiteTemplate.html")),
        Err(Error::ResourceNotFoundError { .. })
    ));
}

#[test]
fn test_directory_templates() {
    let temp_dir = TempDir::new().unwrap();
    let template_dir = temp_dir.path().join("Private/AfxGenerator/Fusion");
    std::fs::create_dir_all(&template_dir).unwrap();
    std::fs::write(template_dir.join("Root.fusion"), "// {siteName}").unwrap();

    let bundle = TemplateBundle::directory(temp_dir.path());
    let locator = resolve(GeneratorVariant::Afx, "Fusion/Root.fusion");
    assert_eq!(bundle.load(&locator).unwrap(), "// {siteName}");

    let missing = resolve(GeneratorVariant::Afx, "Content/Sites.xml");
    match bundle.load(&missing) {
        Err(Error::ResourceNotFoundError { locator }) => {
            assert_eq!(locator, "resource://SiteKickstarter/Private/AfxGenerator/Content/Sites.xml")
        }
        other => panic!("Expected ResourceNotFoundError, got {other:?}"),
    }
}
