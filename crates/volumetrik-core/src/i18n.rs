/// Display strings for the supported interface languages.
///
/// English is complete; other locales fall back to English for any string
/// they do not translate.

/// Interface language, stored in the settings document as its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
    Es,
    De,
    It,
}

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Fr, Locale::Es, Locale::De, Locale::It];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
            Self::De => "de",
            Self::It => "it",
        }
    }

    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or_default()
    }

    /// Name of the language in that language, for the language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Es => "Español",
            Self::De => "Deutsch",
            Self::It => "Italiano",
        }
    }
}

/// Every translatable string shown by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    Scan,
    Stop,
    LargestDirectories,
    LargestFiles,
    FileBrowser,
    TopFileTypes,
    FileTypeUsage,
    AvailableSpace,
    Name,
    Size,
    Percent,
    Files,
    Modified,
    Up,
    Used,
    Available,
    Total,
    NoData,
    CapacityUnknown,
    SelectFolder,
    SelectThisFolder,
    EnterPath,
    Settings,
    General,
    Monitoring,
    Alerts,
    Language,
    EnableMonitoring,
    MonitoredPaths,
    MaxUsed,
    MinRemaining,
    Add,
    IntervalMinutes,
    EnableAlerts,
    CustomAlertMessage,
    BotToken,
    ChatId,
    UserKey,
    ApiToken,
    ServerUrl,
    AppToken,
    TopicUrl,
    AccessToken,
    GenericWebhookUrl,
    SlackWebhookUrl,
    DiscordWebhookUrl,
    TeamsWebhookUrl,
    Cancel,
    SaveChanges,
    ColorPalette,
    PaletteDefault,
    PaletteOcean,
    PaletteSunset,
    PaletteForest,
    PaletteRoyal,
    ResetLayout,
    ScanStarted,
    ScanFailed,
    ScanAborted,
    PathAlreadyMonitored,
    InvalidPathThreshold,
    SettingsSavedSuccess,
    SettingsSaveFailed,
    LayoutSaved,
    ErrorSavingLayout,
    ErrorLoadingLayout,
    LayoutReset,
}

/// Look up `text` in `locale`, falling back to English.
pub fn tr(locale: Locale, text: Text) -> &'static str {
    let translated = match locale {
        Locale::En => None,
        Locale::Fr => fr(text),
        Locale::Es => es(text),
        Locale::De => de(text),
        Locale::It => it(text),
    };
    translated.unwrap_or_else(|| en(text))
}

fn en(text: Text) -> &'static str {
    use Text::*;
    match text {
        Scan => "Analyze",
        Stop => "Stop",
        LargestDirectories => "Top Directories by Size",
        LargestFiles => "Top Files by Size",
        FileBrowser => "File Browser",
        TopFileTypes => "File Type Distribution",
        FileTypeUsage => "Storage Allocation by Type",
        AvailableSpace => "Free Storage Capacity",
        Name => "Filename",
        Size => "Storage Usage",
        Percent => "Usage %",
        Files => "File Count",
        Modified => "Last Modified",
        Up => "Parent Directory",
        Used => "Allocated",
        Available => "Free",
        Total => "Capacity",
        NoData => "No file type data available",
        CapacityUnknown => "Disk capacity unknown",
        SelectFolder => "Select Target Directory",
        SelectThisFolder => "Set Target",
        EnterPath => "Input directory path...",
        Settings => "Configuration",
        General => "System",
        Monitoring => "Watchdog",
        Alerts => "Notifications",
        Language => "Interface Language",
        EnableMonitoring => "Activate Watchdog",
        MonitoredPaths => "Watch List",
        MaxUsed => "Max Allocation",
        MinRemaining => "Min Free Space",
        Add => "Append",
        IntervalMinutes => "Polling Interval (min)",
        EnableAlerts => "Activate Alerting",
        CustomAlertMessage => "Custom Payload Template",
        BotToken => "API Token",
        ChatId => "Channel ID",
        UserKey => "User Key",
        ApiToken => "API Token",
        ServerUrl => "Endpoint URL",
        AppToken => "Application Token",
        TopicUrl => "Topic Endpoint",
        AccessToken => "Bearer Token (Opt)",
        GenericWebhookUrl => "Webhook Endpoint",
        SlackWebhookUrl => "Slack Webhook Endpoint",
        DiscordWebhookUrl => "Discord Webhook Endpoint",
        TeamsWebhookUrl => "Teams Webhook Endpoint",
        Cancel => "Abort",
        SaveChanges => "Commit Changes",
        ColorPalette => "Color Palette",
        PaletteDefault => "Default (Slate)",
        PaletteOcean => "Ocean (Blue/Cyan)",
        PaletteSunset => "Sunset (Orange/Red)",
        PaletteForest => "Forest (Green)",
        PaletteRoyal => "Royal (Purple)",
        ResetLayout => "Reset Layout",
        ScanStarted => "Scan started for: ",
        ScanFailed => "Scan failed: ",
        ScanAborted => "Scan aborted",
        PathAlreadyMonitored => "Path already monitored",
        InvalidPathThreshold => "Please enter a valid path and threshold value",
        SettingsSavedSuccess => "Settings saved successfully!",
        SettingsSaveFailed => "Failed to save settings: ",
        LayoutSaved => "Layout saved",
        ErrorSavingLayout => "Error saving layout: ",
        ErrorLoadingLayout => "Error loading layout: ",
        LayoutReset => "Layout reset to default",
    }
}

fn fr(text: Text) -> Option<&'static str> {
    use Text::*;
    Some(match text {
        Scan => "Analyser",
        LargestDirectories => "Répertoires Volumineux",
        LargestFiles => "Fichiers Volumineux",
        FileBrowser => "Explorateur de Fichiers",
        TopFileTypes => "Distribution par Type",
        FileTypeUsage => "Allocation par Extension",
        AvailableSpace => "Capacité Libre",
        Name => "Nom de Fichier",
        Size => "Occupation",
        Percent => "% Usage",
        Files => "Nb Fichiers",
        Modified => "Dernière Modif.",
        Up => "Répertoire Parent",
        Used => "Alloué",
        Available => "Libre",
        Total => "Capacité Totale",
        NoData => "Aucune donnée de type de fichier",
        CapacityUnknown => "Capacité du disque inconnue",
        SelectFolder => "Sélectionner Répertoire Cible",
        SelectThisFolder => "Définir Cible",
        EnterPath => "Saisir chemin répertoire...",
        Settings => "Configuration",
        General => "Système",
        Monitoring => "Supervision",
        Alerts => "Notifications",
        Language => "Langue Interface",
        EnableMonitoring => "Activer Supervision",
        MonitoredPaths => "Liste de Supervision",
        MaxUsed => "Allocation Max",
        MinRemaining => "Espace Libre Min",
        Add => "Ajouter Entrée",
        IntervalMinutes => "Intervalle de Polling (min)",
        EnableAlerts => "Activer Alertes",
        CustomAlertMessage => "Modèle de Charge Utile",
        BotToken | ApiToken => "Token API",
        ChatId => "ID Canal",
        UserKey => "Clé Utilisateur",
        ServerUrl => "URL Endpoint",
        AppToken => "Token Application",
        TopicUrl => "Endpoint Topic",
        AccessToken => "Token Bearer (Opt)",
        GenericWebhookUrl => "Endpoint Webhook",
        SlackWebhookUrl => "Endpoint Webhook Slack",
        DiscordWebhookUrl => "Endpoint Webhook Discord",
        TeamsWebhookUrl => "Endpoint Webhook Teams",
        Cancel => "Abandonner",
        SaveChanges => "Appliquer Changements",
        ColorPalette => "Palette de Couleurs",
        PaletteDefault => "Défaut (Ardoise)",
        PaletteOcean => "Océan (Bleu/Cyan)",
        PaletteSunset => "Coucher de Soleil (Orange/Rouge)",
        PaletteForest => "Forêt (Vert)",
        PaletteRoyal => "Royal (Violet)",
        ResetLayout => "Réinitialiser la disposition",
        ScanStarted => "Analyse démarrée pour : ",
        ScanFailed => "Échec de l'analyse : ",
        ScanAborted => "Analyse annulée",
        PathAlreadyMonitored => "Chemin déjà surveillé",
        InvalidPathThreshold => "Veuillez entrer un chemin et un seuil valides",
        SettingsSavedSuccess => "Paramètres enregistrés avec succès !",
        SettingsSaveFailed => "Échec de l'enregistrement des paramètres : ",
        LayoutSaved => "Disposition enregistrée",
        ErrorSavingLayout => "Erreur lors de l'enregistrement de la disposition : ",
        ErrorLoadingLayout => "Erreur lors du chargement de la disposition : ",
        LayoutReset => "Disposition réinitialisée",
        Stop => return None,
    })
}

fn es(text: Text) -> Option<&'static str> {
    use Text::*;
    Some(match text {
        Scan => "Analizar",
        LargestDirectories => "Directorios Voluminosos",
        LargestFiles => "Archivos Voluminosos",
        FileBrowser => "Explorador de Archivos",
        TopFileTypes => "Distribución por Tipo",
        FileTypeUsage => "Asignación por Extensión",
        AvailableSpace => "Capacidad Libre",
        Name => "Nombre de Archivo",
        Size => "Ocupación",
        Percent => "% Uso",
        Files => "Conteo Archivos",
        Modified => "Última Modif.",
        Up => "Directorio Padre",
        Used => "Asignado",
        Available => "Libre",
        Total => "Capacidad Total",
        SelectFolder => "Seleccionar Directorio Objetivo",
        SelectThisFolder => "Establecer Objetivo",
        EnterPath => "Ingresar ruta directorio...",
        Settings => "Configuración",
        General => "Sistema",
        Monitoring => "Supervisión",
        Alerts => "Notificaciones",
        Language => "Idioma Interfaz",
        EnableMonitoring => "Activar Supervisión",
        MonitoredPaths => "Lista de Supervisión",
        MaxUsed => "Asignación Máx",
        MinRemaining => "Espacio Libre Mín",
        Add => "Añadir Entrada",
        IntervalMinutes => "Intervalo de Polling (min)",
        EnableAlerts => "Activar Alertas",
        CustomAlertMessage => "Plantilla de Carga Útil",
        BotToken | ApiToken => "Token API",
        ChatId => "ID Canal",
        UserKey => "Clave Usuario",
        ServerUrl => "URL Endpoint",
        AppToken => "Token Aplicación",
        TopicUrl => "Endpoint Topic",
        AccessToken => "Token Bearer (Opt)",
        GenericWebhookUrl => "Endpoint Webhook",
        SlackWebhookUrl => "Endpoint Webhook Slack",
        DiscordWebhookUrl => "Endpoint Webhook Discord",
        TeamsWebhookUrl => "Endpoint Webhook Teams",
        Cancel => "Abortar",
        SaveChanges => "Aplicar Cambios",
        ColorPalette => "Paleta de Colores",
        PaletteDefault => "Por Defecto (Pizarra)",
        PaletteOcean => "Océano (Azul/Cian)",
        PaletteSunset => "Atardecer (Naranja/Rojo)",
        PaletteForest => "Bosque (Verde)",
        PaletteRoyal => "Real (Púrpura)",
        ScanStarted => "Escaneo iniciado para: ",
        ScanFailed => "Escaneo fallido: ",
        ScanAborted => "Escaneo abortado",
        PathAlreadyMonitored => "Ruta ya monitoreada",
        InvalidPathThreshold => "Por favor ingrese una ruta y un valor de umbral válidos",
        SettingsSavedSuccess => "¡Configuración guardada exitosamente!",
        SettingsSaveFailed => "Error al guardar la configuración: ",
        LayoutSaved => "Diseño guardado",
        ErrorSavingLayout => "Error al guardar el diseño: ",
        ErrorLoadingLayout => "Error al cargar el diseño: ",
        Stop | NoData | CapacityUnknown | ResetLayout | LayoutReset => return None,
    })
}

fn de(text: Text) -> Option<&'static str> {
    use Text::*;
    Some(match text {
        Scan => "Analysieren",
        LargestDirectories => "Voluminöse Verzeichnisse",
        LargestFiles => "Voluminöse Dateien",
        FileBrowser => "Dateibrowser",
        TopFileTypes => "Verteilung nach Typ",
        FileTypeUsage => "Zuweisung nach Erweiterung",
        AvailableSpace => "Freie Kapazität",
        Name => "Dateiname",
        Size => "Belegung",
        Percent => "% Nutzung",
        Files => "Dateianzahl",
        Modified => "Letzte Änd.",
        Up => "Übergeordnetes Verzeichnis",
        Used => "Zugewiesen",
        Available => "Frei",
        Total => "Gesamtkapazität",
        SelectFolder => "Zielverzeichnis Wählen",
        SelectThisFolder => "Ziel Setzen",
        EnterPath => "Verzeichnispfad eingeben...",
        Settings => "Konfiguration",
        General => "System",
        Monitoring => "Überwachung",
        Alerts => "Benachrichtigungen",
        Language => "Schnittstellensprache",
        EnableMonitoring => "Überwachung Aktivieren",
        MonitoredPaths => "Überwachungsliste",
        MaxUsed => "Max Zuweisung",
        MinRemaining => "Min Freier Speicher",
        Add => "Eintrag Hinzufügen",
        IntervalMinutes => "Polling-Intervall (Min)",
        EnableAlerts => "Warnungen Aktivieren",
        CustomAlertMessage => "Nutzlast-Vorlage",
        BotToken | ApiToken => "API Token",
        ChatId => "Kanal ID",
        UserKey => "Benutzerschlüssel",
        ServerUrl => "Endpoint URL",
        AppToken => "Anwendungs-Token",
        TopicUrl => "Topic Endpoint",
        AccessToken => "Bearer Token (Opt)",
        GenericWebhookUrl => "Webhook Endpoint",
        SlackWebhookUrl => "Slack Webhook Endpoint",
        DiscordWebhookUrl => "Discord Webhook Endpoint",
        TeamsWebhookUrl => "Teams Webhook Endpoint",
        Cancel => "Abbrechen",
        SaveChanges => "Änderungen Anwenden",
        ColorPalette => "Farbpalette",
        PaletteDefault => "Standard (Schiefer)",
        PaletteOcean => "Ozean (Blau/Cyan)",
        PaletteSunset => "Sonnenuntergang (Orange/Rot)",
        PaletteForest => "Wald (Grün)",
        PaletteRoyal => "Königlich (Lila)",
        ScanStarted => "Scan gestartet für: ",
        ScanFailed => "Scan fehlgeschlagen: ",
        ScanAborted => "Scan abgebrochen",
        PathAlreadyMonitored => "Pfad wird bereits überwacht",
        InvalidPathThreshold => "Bitte geben Sie einen gültigen Pfad und Schwellenwert ein",
        SettingsSavedSuccess => "Einstellungen erfolgreich gespeichert!",
        SettingsSaveFailed => "Fehler beim Speichern der Einstellungen: ",
        LayoutSaved => "Layout gespeichert",
        ErrorSavingLayout => "Fehler beim Speichern des Layouts: ",
        ErrorLoadingLayout => "Fehler beim Laden des Layouts: ",
        Stop | NoData | CapacityUnknown | ResetLayout | LayoutReset => return None,
    })
}

fn it(text: Text) -> Option<&'static str> {
    use Text::*;
    Some(match text {
        Scan => "Analizza",
        LargestDirectories => "Directory più grandi",
        LargestFiles => "File più grandi",
        FileBrowser => "Esplora File",
        TopFileTypes => "Distribuzione tipi file",
        FileTypeUsage => "Allocazione per tipo",
        AvailableSpace => "Spazio disponibile",
        Name => "Nome file",
        Size => "Utilizzo spazio",
        Percent => "% Uso",
        Files => "Num file",
        Modified => "Ultima modifica",
        Up => "Directory superiore",
        Used => "Usato",
        Available => "Libero",
        Total => "Capacità totale",
        SelectFolder => "Seleziona directory",
        SelectThisFolder => "Imposta destinazione",
        EnterPath => "Inserisci percorso directory...",
        Settings => "Configurazione",
        General => "Sistema",
        Monitoring => "Monitoraggio",
        Alerts => "Notifiche",
        Language => "Lingua interfaccia",
        EnableMonitoring => "Attiva monitoraggio",
        MonitoredPaths => "Lista monitoraggio",
        MaxUsed => "Allocazione Max",
        MinRemaining => "Spazio libero Min",
        Add => "Aggiungi",
        IntervalMinutes => "Intervallo polling (min)",
        EnableAlerts => "Attiva avvisi",
        CustomAlertMessage => "Modello payload personalizzato",
        BotToken | ApiToken => "Token API",
        ChatId => "ID Canale",
        UserKey => "Chiave Utente",
        ServerUrl => "URL Endpoint",
        AppToken => "Token Applicazione",
        TopicUrl => "Endpoint Topic",
        AccessToken => "Token Bearer (Opz)",
        GenericWebhookUrl => "Endpoint Webhook",
        SlackWebhookUrl => "Endpoint Webhook Slack",
        DiscordWebhookUrl => "Endpoint Webhook Discord",
        TeamsWebhookUrl => "Endpoint Webhook Teams",
        Cancel => "Annulla",
        SaveChanges => "Salva modifiche",
        ColorPalette => "Tavolozza colori",
        PaletteDefault => "Predefinito (Ardesia)",
        PaletteOcean => "Oceano (Blu/Ciano)",
        PaletteSunset => "Tramonto (Arancione/Rosso)",
        PaletteForest => "Foresta (Verde)",
        PaletteRoyal => "Reale (Viola)",
        ScanStarted => "Scansione avviata per: ",
        ScanFailed => "Scansione fallita: ",
        ScanAborted => "Scansione annullata",
        PathAlreadyMonitored => "Percorso già monitorato",
        InvalidPathThreshold => "Inserisci un percorso e una soglia validi",
        SettingsSavedSuccess => "Impostazioni salvate con successo!",
        SettingsSaveFailed => "Salvataggio impostazioni fallito: ",
        LayoutSaved => "Layout salvato",
        ErrorSavingLayout => "Errore salvataggio layout: ",
        ErrorLoadingLayout => "Errore caricamento layout: ",
        Stop | NoData | CapacityUnknown | ResetLayout | LayoutReset => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), locale);
        }
        assert_eq!(Locale::from_code("FR"), Locale::Fr);
        assert_eq!(Locale::from_code("pt-BR"), Locale::En);
        assert_eq!(Locale::from_code(""), Locale::En);
    }

    #[test]
    fn translated_strings_differ_from_english() {
        assert_eq!(tr(Locale::En, Text::Scan), "Analyze");
        assert_eq!(tr(Locale::Fr, Text::Scan), "Analyser");
        assert_eq!(tr(Locale::De, Text::ScanAborted), "Scan abgebrochen");
    }

    #[test]
    fn missing_translation_falls_back_to_english() {
        assert_eq!(tr(Locale::De, Text::ResetLayout), "Reset Layout");
        assert_eq!(tr(Locale::It, Text::Stop), "Stop");
    }
}
