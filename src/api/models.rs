use serde::Deserialize;

/// Graph listing response (`{"value": [...]}`)
#[derive(Debug, Clone, Deserialize)]
pub struct Collection<T> {
    #[serde(default)]
    pub value: Vec<T>,
    #[serde(rename = "@odata.nextLink")]
    pub next_link: Option<String>,
}

/// A drive or drive item descriptor as returned by Graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub last_modified_date_time: Option<String>,
    #[serde(rename = "@microsoft.graph.downloadUrl")]
    pub download_url: Option<String>,
    pub folder: Option<FolderFacet>,
    pub file: Option<FileFacet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderFacet {
    pub child_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFacet {
    pub mime_type: Option<String>,
}

/// Graph error body (`{"error": {"code", "message"}}`)
#[derive(Debug, Clone, Deserialize)]
pub struct GraphErrorBody {
    pub error: GraphError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphError {
    pub code: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_children_listing() {
        let body = r#"{
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#drives('d1')/items('f1')/children",
            "@odata.nextLink": "https://graph.microsoft.com/v1.0/next",
            "value": [
                {
                    "id": "01ABC",
                    "name": "GCTS_weekly.xlsx",
                    "lastModifiedDateTime": "2022-09-28T14:03:11Z",
                    "@microsoft.graph.downloadUrl": "https://tenant.sharepoint.com/download?x=1",
                    "size": 10240,
                    "file": { "mimeType": "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" }
                },
                {
                    "id": "01DEF",
                    "name": "Archive",
                    "folder": { "childCount": 3 }
                }
            ]
        }"#;

        let listing: Collection<DriveItem> = serde_json::from_str(body).unwrap();
        assert_eq!(listing.value.len(), 2);
        assert!(listing.next_link.is_some());

        let file = &listing.value[0];
        assert_eq!(file.last_modified_date_time.as_deref(), Some("2022-09-28T14:03:11Z"));
        assert_eq!(
            file.download_url.as_deref(),
            Some("https://tenant.sharepoint.com/download?x=1")
        );
        assert!(file.folder.is_none());
        assert_eq!(listing.value[1].folder.as_ref().unwrap().child_count, Some(3));
        assert!(listing.value[1].file.is_none());
    }

    #[test]
    fn test_missing_value_is_empty() {
        let listing: Collection<DriveItem> = serde_json::from_str("{}").unwrap();
        assert!(listing.value.is_empty());
    }
}
